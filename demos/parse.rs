//! An example to decompose a URI from the CLI argument.

use uri_parts::Uri;

const USAGE: &str = "\
USAGE:
    parse [FLAGS] [--] URI

FLAGS:
    -h, --help      Prints this help

ARGS:
    <URI>           URI or relative reference
";

fn print_help() {
    eprintln!("{}", USAGE);
}

fn help_and_exit() -> ! {
    print_help();
    std::process::exit(1);
}

fn die(msg: impl std::fmt::Display) -> ! {
    eprintln!("ERROR: {}", msg);
    eprintln!();
    print_help();
    std::process::exit(1);
}

/// CLI options.
#[derive(Default, Debug, Clone)]
struct CliOpt {
    /// URI.
    uri: String,
}

impl CliOpt {
    fn parse() -> Self {
        let mut args = std::env::args();
        // Skip `argv[0]`.
        args.next();

        let mut uri = None;

        for arg in args.by_ref() {
            match arg.as_str() {
                "--help" | "-h" => help_and_exit(),
                "--" => break,
                opt if opt.starts_with('-') => die(format_args!("Unknown option: {}", opt)),
                _ => {
                    if uri.replace(arg).is_some() {
                        die("URI can be specified at most once");
                    }
                }
            }
        }

        for arg in args {
            if uri.replace(arg).is_some() {
                die("URI can be specified at most once");
            }
        }

        let uri = uri.unwrap_or_else(|| die("URI should be specified"));
        Self { uri }
    }
}

fn main() {
    let opt = CliOpt::parse();

    let uri = match Uri::parse(&opt.uri) {
        Ok(v) => v,
        Err(e) => die(format_args!("Failed to parse {:?}: {}", opt.uri, e)),
    };
    println!("Successfully parsed: {:?}", uri.as_str());

    if uri.is_relative_reference() {
        println!("URI is a relative reference.");
    } else {
        println!("scheme: {:?}", uri.scheme());
    }
    println!("user info: {:?}", uri.user_info());
    println!("host: {:?}", uri.host());
    match uri.port_number() {
        Some(port) => println!("port: {}", port),
        None => println!("URI has no port."),
    }
    println!("path: {:?}", uri.path());
    if uri.contains_relative_path() {
        println!("path is relative.");
    } else {
        println!("path is absolute.");
    }
    println!("query: {:?}", uri.query());
    println!("fragment: {:?}", uri.fragment());
}
