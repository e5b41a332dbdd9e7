use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Arg, ArgMatches, Command, ValueHint};

use simpson_quad::configuration::Configuration;
use simpson_quad::io::gridreader::read_grid;
use simpson_quad::manager::manager::IManager;
use simpson_quad::manager::managererror::ManagerError;
use simpson_quad::math::curve::curve::Polynomial;
use simpson_quad::math::integration::simpson::integrate_curve;
use simpson_quad::math::integration::simpson2d::simpson_2d;

fn cli() -> Command {
    Command::new("simpson-quad")
        .version(clap::crate_version!())
        .about("Composite Simpson quadrature in one and two dimensions")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("poly")
                .about("Integrate the polynomial c0 + c1*x + c2*x^2 + ... over [a, b]")
                .arg(
                    Arg::new("coefs")
                        .long("coefs")
                        .required(true)
                        .value_delimiter(',')
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(f64))
                        .help("Comma separated coefficients, lowest degree first"),
                )
                .arg(
                    Arg::new("a")
                        .long("a")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("b")
                        .long("b")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("n")
                        .short('n')
                        .long("n")
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(i64))
                        .conflicts_with("rule")
                        .help("Number of subintervals (even, >= 2)"),
                )
                .arg(
                    Arg::new("rule")
                        .long("rule")
                        .requires("config")
                        .help("Name of a simpson rule defined in the configuration file"),
                )
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath)
                        .help("Path to a JSON configuration file"),
                ),
        )
        .subcommand(
            Command::new("grid")
                .about("Integrate a CSV grid of samples f(x_i, y_j)")
                .arg(
                    Arg::new("file")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("dx")
                        .long("dx")
                        .required(true)
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("dy")
                        .long("dy")
                        .required(true)
                        .value_parser(clap::value_parser!(f64)),
                ),
        )
}

fn run_poly(matches: &ArgMatches) -> Result<f64, ManagerError> {
    let coefs: Vec<f64> = matches
        .get_many::<f64>("coefs")
        .map(|values| values.copied().collect())
        .unwrap_or_default();
    let a = *matches.get_one::<f64>("a").unwrap_or(&0.0);
    let b = *matches.get_one::<f64>("b").unwrap_or(&0.0);
    let polynomial = Polynomial::new(coefs);

    if let Some(rule_name) = matches.get_one::<String>("rule") {
        let config = Configuration::new();
        if let Some(config_path) = matches.get_one::<PathBuf>("config") {
            config.from_reader(config_path.to_string_lossy().into_owned())?;
        }
        let rule = config.simpson_rule_manager().get(rule_name)?;
        log::info!("using rule '{}' with {} subintervals", rule.name(), rule.subintervals());
        Ok(rule.integrate_curve(&polynomial, a, b)?)
    } else {
        let n = *matches.get_one::<i64>("n").unwrap_or(&2);
        Ok(integrate_curve(&polynomial, a, b, n)?)
    }
}

fn run_grid(matches: &ArgMatches) -> Result<f64, ManagerError> {
    let file = matches
        .get_one::<PathBuf>("file")
        .map(|path| path.to_string_lossy().into_owned())
        .unwrap_or_default();
    let dx = *matches.get_one::<f64>("dx").unwrap_or(&1.0);
    let dy = *matches.get_one::<f64>("dy").unwrap_or(&1.0);
    let grid = read_grid(file)?;
    Ok(simpson_2d(dx, dy, &grid)?)
}

fn main() -> ExitCode {
    env_logger::Builder::default()
        .parse_env(env_logger::Env::default().filter_or("SIMPSON_QUAD_LOG", "error,simpson_quad=info"))
        .init();

    let matches = cli().get_matches();
    let result = match matches.subcommand() {
        Some(("poly", sub_matches)) => run_poly(sub_matches),
        Some(("grid", sub_matches)) => run_grid(sub_matches),
        _ => unreachable!("subcommand is required"),
    };

    match result {
        Ok(value) => {
            println!("{}", value);
            ExitCode::SUCCESS
        }
        Err(error) => {
            log::error!("{}", error);
            ExitCode::FAILURE
        }
    }
}
