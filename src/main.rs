extern crate clap;
use clap::{App, Arg, ArgMatches, SubCommand};

use std::fmt::Display;
use std::process;

extern crate tm_scan;
use tm_scan::analysis::{region_track, ScanReport};
use tm_scan::config::ScanParams;
use tm_scan::tm::{self, FormulaKind};
use tm_scan::{util, validate, SequenceExt};

fn main() {
    env_logger::init();

    let scan_args = || {
        vec![
            Arg::with_name("INPUT")
                .help("FASTA file containing the sequence")
                .required(true),
            Arg::with_name("window")
                .help("Size of the sliding window")
                .short("w")
                .long("window")
                .takes_value(true)
                .value_name("N"),
            Arg::with_name("na")
                .help("Na+ concentration in mol/l for the salt adjusted formula")
                .long("na")
                .takes_value(true)
                .value_name("M"),
            Arg::with_name("formula")
                .help("Which formulas to evaluate")
                .short("f")
                .long("formula")
                .takes_value(true)
                .possible_values(&["basic", "salt", "both"])
                .value_name("FORMULA"),
            Arg::with_name("config")
                .help("JSON file with scan parameters, overridden by command line flags")
                .short("c")
                .long("config")
                .takes_value(true)
                .value_name("PATH"),
        ]
    };

    let matches = App::new("Tm-Scan")
        .version("0.1.0")
        .author("Robin William Hundt")
        .about("Scans DNA sequences for their melting temperature with a sliding window.")
        .subcommand(
            SubCommand::with_name("tm")
                .about("Calculates the melting temperature of a single sequence")
                .arg(
                    Arg::with_name("SEQUENCE")
                        .help("DNA sequence")
                        .required(true),
                ).arg(
                    Arg::with_name("na")
                        .help("Na+ concentration in mol/l for the salt adjusted formula")
                        .long("na")
                        .takes_value(true)
                        .value_name("M"),
                ),
        ).subcommand(
            SubCommand::with_name("scan")
                .about("Calculates the melting temperature profile of the input")
                .args(&scan_args())
                .arg(
                    Arg::with_name("output")
                        .help("Where to store the report as json")
                        .short("o")
                        .long("output")
                        .takes_value(true)
                        .value_name("PATH"),
                ),
        ).subcommand(
            SubCommand::with_name("regions")
                .about("Shows the regions of the profile at or above a threshold")
                .args(&scan_args())
                .arg(
                    Arg::with_name("threshold")
                        .help("Melting temperature threshold in °C")
                        .short("t")
                        .long("threshold")
                        .takes_value(true)
                        .value_name("TM"),
                ),
        ).get_matches();

    let res = if let Some(matches) = matches.subcommand_matches("tm") {
        exec_tm(matches)
    } else if let Some(matches) = matches.subcommand_matches("scan") {
        exec_scan(matches)
    } else if let Some(matches) = matches.subcommand_matches("regions") {
        exec_regions(matches)
    } else {
        eprintln!("{}", matches.usage());
        process::exit(1);
    };
    if let Err(err) = res {
        print_and_exit(err);
    }
}

fn exec_tm(matches: &ArgMatches) -> Result<(), String> {
    let input = matches.value_of("SEQUENCE").unwrap();
    let sequence = validate(input).map_err(|e| e.to_string())?;
    let na = match matches.value_of("na") {
        Some(value) => parse_value::<f64>("na", value)?,
        None => tm::DEFAULT_NA_CONCENTRATION,
    };
    let basic = tm::basic_tm(&sequence).map_err(|e| e.to_string())?;
    let salt = tm::salt_adjusted_tm(&sequence, na).map_err(|e| e.to_string())?;
    println!("Sequence: {}", sequence.to_string_upper());
    println!("Basic Tm:\t{:.2}°C", basic);
    println!("Salt adjusted Tm ([Na+] = {} M):\t{:.2}°C", na, salt);
    Ok(())
}

fn exec_scan(matches: &ArgMatches) -> Result<(), String> {
    let input = matches.value_of("INPUT").unwrap();
    let params = params_from(matches)?;
    let sequence = util::read_sequence_or_exit(input);
    let scanner = params.scanner().map_err(|e| e.to_string())?;
    let report = ScanReport::new(&scanner, &sequence, params.threshold).map_err(|e| e.to_string())?;

    if let Some(path) = matches.value_of("output") {
        report.store(path).map_err(|e| e.to_string())?;
        println!("Stored report at: {}", path);
        return Ok(());
    }

    println!("position\tbasic\tsalt_adjusted");
    for result in &report.results {
        println!(
            "{}\t{}\t{}",
            result.position,
            format_value(result.basic),
            format_value(result.salt_adjusted)
        );
    }
    print_statistics(&report);
    Ok(())
}

fn exec_regions(matches: &ArgMatches) -> Result<(), String> {
    let input = matches.value_of("INPUT").unwrap();
    let mut params = params_from(matches)?;
    if let Some(value) = matches.value_of("threshold") {
        params.threshold = parse_value("threshold", value)?;
    }
    let sequence = util::read_sequence_or_exit(input);
    let scanner = params.scanner().map_err(|e| e.to_string())?;
    let report = ScanReport::new(&scanner, &sequence, params.threshold).map_err(|e| e.to_string())?;

    print_statistics(&report);
    println!("Regions at or above {}°C:", report.threshold);
    for summary in &report.summaries {
        let track: String = region_track(&summary.regions, report.results.len())
            .into_iter()
            .map(|covered| if covered { '#' } else { ' ' })
            .collect();
        println!("{:>14} |{}|", summary.formula.to_string(), track);
        for region in &summary.regions {
            println!("{:>14}  {}..={}", "", region.start, region.end);
        }
    }
    Ok(())
}

fn params_from(matches: &ArgMatches) -> Result<ScanParams, String> {
    let mut params = match matches.value_of("config") {
        Some(path) => ScanParams::load(path).map_err(|e| format!("{}: {}", path, e))?,
        None => ScanParams::default(),
    };
    if let Some(value) = matches.value_of("window") {
        params.window_size = parse_value("window", value)?;
    }
    if let Some(value) = matches.value_of("na") {
        params.na_concentration = parse_value("na", value)?;
    }
    match matches.value_of("formula") {
        Some("basic") => params.formulas = vec![FormulaKind::Basic],
        Some("salt") => params.formulas = vec![FormulaKind::SaltAdjusted],
        Some("both") => params.formulas = vec![FormulaKind::Basic, FormulaKind::SaltAdjusted],
        _ => {}
    }
    Ok(params)
}

fn print_statistics(report: &ScanReport) {
    println!(
        "Sequence length: {} bp, window size: {} bp, windows: {}",
        report.sequence_length,
        report.window_size,
        report.results.len()
    );
    for summary in &report.summaries {
        match summary.extrema {
            Some(ext) => println!(
                "{} Tm:\tMin: {:.2}°C (at {})\tMax: {:.2}°C (at {})",
                summary.formula, ext.min_value, ext.min_position, ext.max_value, ext.max_position
            ),
            None => println!(
                "{} Tm:\tsequence is shorter than the window size",
                summary.formula
            ),
        }
    }
}

fn format_value(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{:.2}", value),
        None => "-".to_string(),
    }
}

fn parse_value<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("Invalid value for {}: {}", name, value))
}

fn print_and_exit<T: Display>(err: T) -> ! {
    eprintln!("Aborting!\n{}", err);
    process::exit(1);
}
