use anyhow::Context as _;
use std::io::{Read as _, Write as _};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use uic::driver::Driver;
use uic::option::Options;
use uic::uic::Uic;

macro_rules! errexit {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{ eprintln!($fmt $(, $arg)*); std::process::exit(1); }}
}

const USAGE: &str = "\
Usage: uic [options] [uifile]

  -h, --help                  display this help and exit
  -o <file>                   place the output into <file>
  -tr <func>                  use <func> for i18n
  -p, --no-protection         disable header protection
  -n, --no-connections        disable generating slot connections
  -g <language>               generate code for <language> (only cpp)
  --no-implicit-includes      disable generating #include-directives for unknown classes
  -x, --extract <qrcfile>     extract embedded images to <qrcfile> and images/
  --postfix <postfix>         postfix to add to all generated classnames
";

fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> String {
    match args.next() {
        Some(v) => v,
        None => errexit!("uic: option {flag} requires an argument\n\n{USAGE}"),
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Options {
    let mut options = Options::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print!("{USAGE}");
                std::process::exit(0);
            }
            "-o" | "--output" => options.output_file = Some(value(&mut args, &arg).into()),
            "-tr" | "--translate" => options.translate_function = value(&mut args, &arg),
            "-p" | "--no-protection" => options.header_protection = false,
            "-n" | "--no-connections" => options.auto_connection = false,
            "--no-implicit-includes" => options.implicit_includes = false,
            "--postfix" => options.postfix = value(&mut args, &arg),
            "-x" | "--extract" => {
                options.extract_images = true;
                options.qrc_output_file = Some(value(&mut args, &arg).into());
            }
            "-g" | "--generator" => {
                let language = value(&mut args, &arg);
                if !language.eq_ignore_ascii_case("cpp") {
                    errexit!("uic: unsupported generator '{language}'");
                }
            }
            flag if flag.starts_with('-') && flag.len() > 1 => {
                errexit!("uic: unknown option {flag}\n\n{USAGE}")
            }
            input => {
                if options.input_file.is_some() {
                    errexit!("uic: too many input files\n\n{USAGE}");
                }
                options.input_file = Some(PathBuf::from(input));
            }
        }
    }
    options
}

fn run(options: &Options) -> anyhow::Result<Vec<String>> {
    let src = match &options.input_file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?,
        None => {
            let mut src = String::new();
            std::io::stdin().read_to_string(&mut src).context("could not read stdin")?;
            src
        }
    };

    let mut driver = Driver::new();
    let mut uic = Uic::new(&mut driver, options);
    let ui = uic.load(&src).with_context(|| options.message_prefix())?;

    let mut header = vec![];
    uic.write(&ui, &mut header).with_context(|| options.message_prefix())?;

    match &options.output_file {
        Some(path) => std::fs::write(path, &header)
            .with_context(|| format!("could not create output file {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&header)?;
            stdout.flush()?;
        }
    }
    Ok(driver.problems().to_vec())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let options = parse_args(std::env::args().skip(1));
    match run(&options) {
        Ok(problems) if problems.is_empty() => {}
        Ok(problems) => {
            for problem in &problems {
                eprintln!("{}: {problem}", options.message_prefix());
            }
            std::process::exit(1);
        }
        Err(e) => errexit!("uic: {e:#}"),
    }
}
