//! Argument Parser for java-kiosk
//!
//! Only a handful of JVM options are patched by the launcher, everything else
//! is forwarded to `java` untouched:
//!
//! --module-path, -p <path>   Colon separated module path
//! --add-modules <modules>    Comma separated list of root modules
//! -D <key=value>             System property, may be repeated
//! --help, -h                 Show usage
//!
//! Unknown options are not errors. They are kept, in order, together with
//! any value that follows them. A literal `--` stops option scanning.

/// Result of parsing arguments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    /// Raw `--module-path` value (last occurrence wins)
    pub module_path: String,
    /// Raw `--add-modules` value (last occurrence wins)
    pub add_modules: String,
    /// `-D` properties in the order given
    pub properties: Vec<(String, String)>,
    /// Tokens forwarded to `java` verbatim
    pub passthrough: Vec<String>,
    /// `-h` or `--help` was given
    pub help: bool,
}

/// Split a `-D` value into key and value on the first `=`
///
/// A value without `=` becomes a property with an empty value.
pub fn split_property(data: &str) -> (String, String) {
    match data.split_once('=') {
        Some((key, value)) => (key.to_string(), value.to_string()),
        None => (data.to_string(), String::new()),
    }
}

/// Parse command line arguments into known options and pass-through tokens
pub fn parse_args(args: &[String]) -> Result<ParsedArgs, String> {
    let mut parsed = ParsedArgs::default();

    let mut i = 0;
    while i < args.len() {
        if args[i] == "--" {
            parsed.passthrough.extend_from_slice(&args[i..]);
            break;
        }
        match parse_option(args, i, &mut parsed)? {
            0 => {
                parsed.passthrough.push(args[i].clone());
                i += 1;
            }
            consumed => {
                i += consumed;
            }
        }
    }

    Ok(parsed)
}

/// Fetch the value following an option, as `--name value`
///
/// `option` is the full option name used in the error message. A lone `-`
/// is a value, anything else starting with `-` is the next option.
fn next_value(args: &[String], index: usize, option: &str) -> Result<String, String> {
    match args.get(index + 1) {
        Some(value) if value == "-" || !value.starts_with('-') => Ok(value.clone()),
        _ => Err(format!("argument {}: expected one argument", option)),
    }
}

/// Value attached to a short option, as `-p<value>` or `-p=<value>`
fn attached_value<'a>(arg: &'a str, short: &str) -> Option<&'a str> {
    let value = arg.strip_prefix(short).filter(|v| !v.is_empty())?;
    Some(value.strip_prefix('=').unwrap_or(value))
}

/// Parse a single option from args array
/// Returns number of arguments consumed (0 if not recognized)
fn parse_option(args: &[String], index: usize, parsed: &mut ParsedArgs) -> Result<usize, String> {
    let arg = &args[index];

    // --help or -h
    if arg == "--help" || arg == "-h" {
        parsed.help = true;
        return Ok(1);
    }

    // --module-path or -p
    if arg == "--module-path" || arg == "-p" {
        parsed.module_path = next_value(args, index, "-p/--module-path")?;
        return Ok(2);
    }

    // --module-path=<value>
    if let Some(value) = arg.strip_prefix("--module-path=") {
        parsed.module_path = value.to_string();
        return Ok(1);
    }

    // -p<value> or -p=<value>
    if let Some(value) = attached_value(arg, "-p") {
        parsed.module_path = value.to_string();
        return Ok(1);
    }

    // --add-modules
    if arg == "--add-modules" {
        parsed.add_modules = next_value(args, index, "--add-modules")?;
        return Ok(2);
    }

    // --add-modules=<value>
    if let Some(value) = arg.strip_prefix("--add-modules=") {
        parsed.add_modules = value.to_string();
        return Ok(1);
    }

    // -D <key=value>
    if arg == "-D" {
        let value = next_value(args, index, "-D")?;
        parsed.properties.push(split_property(&value));
        return Ok(2);
    }

    // -D<key=value> or -D=<key=value>
    if let Some(value) = attached_value(arg, "-D") {
        parsed.properties.push(split_property(value));
        return Ok(1);
    }

    // Not a recognized option
    Ok(0)
}
