//! Token-level check of the argument list ahead of clap.
//!
//! clap accepts more syntax than the documented flag table: clustered short
//! flags (`-rt foo`), glued values (`-tfoo`), `=` values (`--trace=foo`) and
//! the `--` terminator. A single cursor pass here admits only the exact
//! spellings below, so clap only ever sees lists it reads the same way.

use std::ffi::{OsStr, OsString};

use crate::config::parse_number;
use crate::error::ArgsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Takes {
    Help,
    Nothing,
    Path,
    Number,
}

#[derive(Debug)]
struct Flag {
    short: char,
    long: &'static str,
    takes: Takes,
}

const FLAGS: [Flag; 6] = [
    Flag { short: 'h', long: "help", takes: Takes::Help },
    Flag { short: 't', long: "trace", takes: Takes::Path },
    Flag { short: 'n', long: "num-out", takes: Takes::Number },
    Flag { short: 'r', long: "randomize", takes: Takes::Nothing },
    Flag { short: 's', long: "start", takes: Takes::Number },
    Flag { short: 'e', long: "end", takes: Takes::Number },
];

impl Flag {
    fn lookup(token: &OsStr) -> Option<&'static Flag> {
        let token = token.to_str()?;
        if let Some(long) = token.strip_prefix("--") {
            return FLAGS.iter().find(|f| f.long == long);
        }
        let mut chars = token.strip_prefix('-')?.chars();
        match (chars.next(), chars.next()) {
            (Some(short), None) => FLAGS.iter().find(|f| f.short == short),
            _ => None,
        }
    }

    fn long_form(&self) -> String {
        format!("--{}", self.long)
    }
}

/// Walk `args` (program name first) and stop at the first token that breaks
/// the flag table.
pub(crate) fn check_tokens(args: &[OsString]) -> Result<(), ArgsError> {
    let mut tokens = args.iter().skip(1);

    while let Some(token) = tokens.next() {
        let Some(flag) = Flag::lookup(token) else {
            return Err(ArgsError::UnknownArgument {
                token: token.to_string_lossy().into_owned(),
            });
        };

        let missing = || ArgsError::MissingArgument {
            flag: flag.long_form(),
        };

        match flag.takes {
            Takes::Help => return Err(ArgsError::HelpRequested),
            Takes::Nothing => {}
            Takes::Path => match tokens.next() {
                Some(value) if Flag::lookup(value).is_none() => {}
                _ => return Err(missing()),
            },
            Takes::Number => {
                let value = tokens.next().ok_or_else(missing)?;
                let valid = value.to_str().is_some_and(|v| parse_number(v).is_ok());
                if !valid {
                    return Err(ArgsError::InvalidNumber {
                        flag: flag.long_form(),
                        value: value.to_string_lossy().into_owned(),
                    });
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Cli;
    use clap::CommandFactory;

    fn check(args: &[&str]) -> Result<(), ArgsError> {
        let argv: Vec<OsString> = std::iter::once("trace_split")
            .chain(args.iter().copied())
            .map(OsString::from)
            .collect();
        check_tokens(&argv)
    }

    fn unknown(token: &str) -> Result<(), ArgsError> {
        Err(ArgsError::UnknownArgument {
            token: token.into(),
        })
    }

    #[test]
    fn table_matches_cli_definition() {
        let mut cmd = Cli::command();
        cmd.build();
        let args: Vec<_> = cmd.get_arguments().collect();
        assert_eq!(args.len(), FLAGS.len());

        for flag in &FLAGS {
            let arg = args
                .iter()
                .find(|a| a.get_long() == Some(flag.long))
                .unwrap_or_else(|| panic!("--{} is not defined", flag.long));
            assert_eq!(arg.get_short(), Some(flag.short), "--{}", flag.long);
            assert_eq!(
                arg.get_action().takes_values(),
                matches!(flag.takes, Takes::Path | Takes::Number),
                "--{}",
                flag.long
            );
        }
    }

    #[test]
    fn exact_spellings_pass() {
        assert_eq!(check(&["-t", "a", "-n", "2", "-r", "-s", "0", "-e", "100"]), Ok(()));
        assert_eq!(
            check(&["--trace", "a", "--num-out", "2", "--randomize", "--start", "0", "--end", "9"]),
            Ok(())
        );
    }

    #[test]
    fn clustered_and_glued_forms_are_unknown() {
        for token in ["-rt", "-tfoo", "--trace=foo", "-n=3", "-n3", "--num-out=3", "--", "-", "--TRACE", "-T"] {
            assert_eq!(check(&["-t", "a", token]), unknown(token), "{token}");
        }
    }

    #[test]
    fn clustered_flags_fail_at_their_position() {
        assert_eq!(check(&["-rt", "foo"]), unknown("-rt"));
    }

    #[test]
    fn trace_value_may_look_like_anything_but_a_flag() {
        assert_eq!(check(&["-t", "-x"]), Ok(()));
        assert_eq!(check(&["-t", ""]), Ok(()));
        assert_eq!(check(&["-t", "--"]), Ok(()));
        assert_eq!(
            check(&["-t", "--randomize"]),
            Err(ArgsError::MissingArgument {
                flag: "--trace".into()
            })
        );
    }

    #[test]
    fn numbers_are_checked_before_later_tokens() {
        assert_eq!(
            check(&["-t", "a", "-n", "abc", "-x"]),
            Err(ArgsError::InvalidNumber {
                flag: "--num-out".into(),
                value: "abc".into(),
            })
        );
        assert_eq!(
            check(&["-s", "", "-t", "a"]),
            Err(ArgsError::InvalidNumber {
                flag: "--start".into(),
                value: String::new(),
            })
        );
    }

    #[test]
    fn help_stops_the_scan() {
        assert_eq!(check(&["-t", "a", "-h", "--bogus"]), Err(ArgsError::HelpRequested));
        assert_eq!(check(&["--bogus", "-h"]), unknown("--bogus"));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_tokens_are_unknown() {
        use std::os::unix::ffi::OsStringExt;

        let argv = vec![
            OsString::from("trace_split"),
            OsString::from_vec(vec![b'-', 0xff]),
        ];
        assert!(matches!(
            check_tokens(&argv),
            Err(ArgsError::UnknownArgument { .. })
        ));
    }
}
