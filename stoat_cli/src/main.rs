use std::{fs::File, io::BufReader, path::PathBuf, process::ExitCode};

use clap::{value_parser, Arg, ArgAction, Command};

use stoat_sat::{
    builder::dimacs::parse_dimacs,
    config::Config,
    context::Context,
    reports::Report,
    structures::literal::CLiteral,
    trivial::TrivialSolver,
    types::err::ErrorKind,
};

enum SolverKind {
    Trivial,
    Cdcl,
}

fn cli() -> Command {
    Command::new("stoat_cli")
        .about("Determines whether a DIMACS formula is satisfiable or unsatisfiable")
        .arg(
            Arg::new("solver")
                .long("solver")
                .required(true)
                .num_args(1)
                .help("The solver to use: trivial_sat or cdcl_sat (case-insensitive)."),
        )
        .arg(
            Arg::new("input")
                .long("input")
                .required(true)
                .num_args(1)
                .value_parser(value_parser!(PathBuf))
                .help("The DIMACS form CNF file to solve."),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .action(ArgAction::SetTrue)
                .help("Enable verbose trace logging."),
        )
}

fn main() -> ExitCode {
    let matches = match cli().try_get_matches() {
        Ok(matches) => matches,
        Err(e) => {
            eprintln!("=== parse error ==== {e}");
            return ExitCode::from(1);
        }
    };

    let solver_name = matches
        .get_one::<String>("solver")
        .map(|name| name.to_lowercase())
        .unwrap_or_default();
    let kind = match solver_name.as_str() {
        "trivial_sat" => SolverKind::Trivial,
        "cdcl_sat" => SolverKind::Cdcl,
        other => {
            eprintln!("=== parse error ==== unknown solver '{other}'");
            return ExitCode::from(1);
        }
    };

    let debug = matches.get_flag("debug");
    let mut logger = env_logger::Builder::from_default_env();
    if debug {
        logger.filter_level(log::LevelFilter::Trace);
    }
    logger.init();

    let input = matches
        .get_one::<PathBuf>("input")
        .expect("input is required")
        .clone();

    match run(kind, &input, debug) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}

fn run(kind: SolverKind, input: &PathBuf, debug: bool) -> Result<(), MainError> {
    let file = File::open(input).map_err(MainError::Io)?;

    let mut atom_count = 0;
    let mut clauses: Vec<Vec<i32>> = Vec::new();
    parse_dimacs(
        BufReader::new(file),
        |atoms, _clauses| atom_count = atoms,
        |literals| clauses.push(literals.to_vec()),
    )
    .map_err(|e| MainError::Solver(ErrorKind::Parse(e)))?;

    let (report, values) = match kind {
        SolverKind::Cdcl => {
            let config = Config {
                debug,
                ..Config::default()
            };
            let mut ctx = Context::from_config(config);
            ctx.fresh_atoms(atom_count as usize);
            for literals in &clauses {
                ctx.add_clause(literals.iter().map(|int| CLiteral::from_int(*int)));
            }
            let report = ctx.solve().map_err(MainError::Solver)?;
            let values = (1..=atom_count).map(|atom| ctx.value_of(atom)).collect();
            (report, values)
        }
        SolverKind::Trivial => {
            let mut solver = TrivialSolver::new();
            solver.fresh_atoms(atom_count as usize);
            for literals in &clauses {
                solver.add_clause(literals.iter().map(|int| CLiteral::from_int(*int)));
            }
            let report = solver.solve().map_err(MainError::Solver)?;
            let values = (1..=atom_count).map(|atom| solver.value_of(atom)).collect();
            (report, values)
        }
    };

    print_report(report, &values);
    Ok(())
}

fn print_report(report: Report, values: &Vec<Option<bool>>) {
    match report {
        Report::Satisfiable => {
            print!("SAT");
            for (index, value) in values.iter().enumerate() {
                let value = value.unwrap_or(false);
                print!(" v{}={}", index + 1, value as u8);
            }
            println!();
        }
        _ => println!("{report}"),
    }
}

enum MainError {
    Io(std::io::Error),
    Solver(ErrorKind),
}

impl std::fmt::Display for MainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => e.fmt(f),
            Self::Solver(e) => e.fmt(f),
        }
    }
}
