use log::{debug, error, info, trace};
use lox_expr::{parse, print, scan, Expression, Token};
use rustyline::{error::ReadlineError, DefaultEditor};

type DynResult = Result<(), Box<dyn std::error::Error>>;

const USAGE: &str = "usage: lox-expr -i | -f <file> | -s <file> | -p <file>";

fn main() -> DynResult {
    if let Err(e) = dotenvy::dotenv() {
        println!("dotenvy load with error {}", e);
    }
    env_logger::init();

    let args = std::env::args().collect::<Vec<String>>();
    let Some(mode) = args.get(1) else {
        return Err(USAGE.into());
    };
    debug!("{:?}", args);

    match (mode.as_str(), args.get(2)) {
        ("-i", _) => repl(),
        ("-f", Some(path)) => run_file(path),
        ("-s", Some(path)) => dump_tokens(path),
        ("-p", Some(path)) => dump_tree(path),
        _ => Err(USAGE.into()),
    }
}

fn repl() -> DynResult {
    info!("Running in REPL mode");

    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                rl.add_history_entry(&line)?;
                // an error ends this line only, the session goes on
                match lox_expr::run(line.trim_end()) {
                    Ok(value) => println!("{}", value),
                    Err(err) => error!("{}", err),
                }
            }
            Err(ReadlineError::Eof) => break,
            Err(ReadlineError::Interrupted) => break,
            Err(err) => {
                return Err(Box::new(err));
            }
        }
    }

    Ok(())
}

fn read_source(file_path: &str) -> Result<String, Box<dyn std::error::Error>> {
    info!("Read from file {}", file_path);
    Ok(std::fs::read_to_string(file_path)?)
}

fn run_file(file_path: &str) -> DynResult {
    let expr = parse_source(&read_source(file_path)?)?;
    let value = lox_expr::evaluate(&expr).map_err(|err| {
        error!("Interpreter error: {}", err);
        err
    })?;
    println!("{}", value);
    Ok(())
}

fn dump_tokens(file_path: &str) -> DynResult {
    for token in scan_source(&read_source(file_path)?)? {
        println!("{}", token);
    }
    Ok(())
}

fn dump_tree(file_path: &str) -> DynResult {
    let expr = parse_source(&read_source(file_path)?)?;
    println!("{}", print(&expr));
    Ok(())
}

fn scan_source(input: &str) -> Result<Vec<Token>, Box<dyn std::error::Error>> {
    let tokens = scan(input).map_err(|err| {
        error!("Scan error: {}", err);
        err
    })?;
    Ok(tokens)
}

fn parse_source(input: &str) -> Result<Expression, Box<dyn std::error::Error>> {
    let tokens = scan_source(input)?;

    for token in &tokens {
        debug!("{}", token);
    }

    let expr = match parse(&tokens) {
        Ok(expr) => expr,
        Err(err) => {
            error!("Parse error: {}", err);
            trace!("{:?}", err.token());
            return Err(Box::new(err));
        }
    };
    trace!("{:?}", &expr);

    Ok(expr)
}
