use std::process;
use std::time::Duration;

use clap::Parser;
use owo_colors::OwoColorize;
use smartlog::{SmartLog, measure, smart_log};
use tokio::runtime::Runtime;

const SECTION_COUNT: u8 = 7;

#[derive(Parser)]
#[command(name = "smartlog", about = "Demo of name-aware development logging")]
struct Cli {
    /// Render records as JSON lines
    #[arg(long)]
    json: bool,
    /// Run a single demo section (1-7)
    #[arg(long)]
    section: Option<u8>,
    /// Disable colored section headers
    #[arg(long)]
    no_color: bool,
}

fn main() {
    let cli = Cli::parse();
    let color = !cli.no_color;

    if let Some(chosen) = cli.section
        && !(1..=SECTION_COUNT).contains(&chosen)
    {
        eprintln!(
            "{} section must be between 1 and {SECTION_COUNT}",
            error_tag(color)
        );
        process::exit(1);
    }

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("{} could not start runtime: {err}", error_tag(color));
            process::exit(1);
        }
    };

    let mut log = SmartLog::new().with_json(cli.json);

    for number in 1..=SECTION_COUNT {
        if cli.section.is_some_and(|chosen| chosen != number) {
            continue;
        }
        print_header(number, color);
        run_section(number, &mut log, &runtime, color);
        println!();
    }
}

fn run_section(number: u8, log: &mut SmartLog, runtime: &Runtime, color: bool) {
    match number {
        1 => values_section(log),
        2 => timer_section(log, runtime),
        3 => parallel_timers_section(log, runtime),
        4 => missing_timer_section(log),
        5 => long_format_section(log, runtime),
        6 => measure_section(log),
        7 => async_measure_section(log, color),
        _ => {}
    }
}

fn values_section(log: &mut SmartLog) {
    let user_name = "Ada";
    let age = 36;
    let is_active = true;
    smart_log!(log, user_name, age, is_active);
    smart_log!(log, "deploy finished", 42);
    smart_log!(log, age + 1, user_name.len());
}

fn timer_section(log: &mut SmartLog, runtime: &Runtime) {
    log.time("fetch_users");
    runtime.block_on(tokio::time::sleep(Duration::from_millis(120)));
    log.time_end("fetch_users");
}

fn parallel_timers_section(log: &mut SmartLog, runtime: &Runtime) {
    log.time("total");
    log.time("first_batch");
    runtime.block_on(tokio::time::sleep(Duration::from_millis(80)));
    log.time_end("first_batch");
    log.time("second_batch");
    runtime.block_on(tokio::time::sleep(Duration::from_millis(60)));
    log.time_end("second_batch");
    log.time_end("total");
}

fn missing_timer_section(log: &mut SmartLog) {
    log.time_end("never_started");
}

fn long_format_section(log: &mut SmartLog, runtime: &Runtime) {
    log.time("slow_operation");
    runtime.block_on(tokio::time::sleep(Duration::from_millis(1050)));
    log.time_end("slow_operation");
}

fn measure_section(log: &mut SmartLog) {
    let total = log.measure_with_label("sum", || (1..=100_000u64).sum::<u64>());
    smart_log!(log, total);
    let doubled = measure!(log, "double", { total * 2 });
    smart_log!(log, doubled);
}

fn async_measure_section(log: &mut SmartLog, color: bool) {
    let waited = log.measure_blocking_with_label("async_wait", async {
        tokio::time::sleep(Duration::from_millis(90)).await;
        "ready"
    });
    match waited {
        Ok(status) => smart_log!(log, status),
        Err(err) => eprintln!("{} could not start runtime: {err}", error_tag(color)),
    }
}

fn section_title(number: u8) -> &'static str {
    match number {
        1 => "value logging",
        2 => "a named timer",
        3 => "parallel timers",
        4 => "stopping a timer that never started",
        5 => "long timings switch to seconds",
        6 => "measuring closures",
        7 => "measuring a future from sync code",
        _ => "",
    }
}

fn print_header(number: u8, color: bool) {
    let title = format!("{number}. {}", section_title(number));
    if color {
        println!("{}", title.bright_cyan().bold());
    } else {
        println!("{title}");
    }
}

fn error_tag(color: bool) -> String {
    if color {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}
