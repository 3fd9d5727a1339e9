//! `flagbind` is a typed command line flag binding engine for Rust.
//!
//! Declare named, typed flags, bind each one to a destination, then parse the command line.
//! `flagbind` takes care of the following concerns:
//! * *Typed flags*:
//! The user should not call any `&str -> T` conversion functions directly.
//! Each flag declares its type, and the raw text is converted before it reaches a destination.
//! * *Flags, not arguments*:
//! Only `--name` / `-name` tokens are interpreted.
//! Every other token is handed back, in order, as the *remainder*.
//! * *Every problem at once*:
//! Parsing never stops at the first failure.
//! Missing, duplicate, invalid, and (optionally) unknown flags are all reported together.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/greet.rs")]
//! ```
//!
//! ```console
//! $ greet
//! Hello, world!
//!
//! $ greet --name=flagbind -t 2 --tag a --tag b extra
//! Hello, flagbind!
//! Hello, flagbind!
//! Tags: a, b
//! Remaining: ["extra"]
//!
//! $ greet --shout -n=you
//! HELLO, YOU!
//!
//! $ greet --times=many --bogus
//! Parse error:
//! 1: unknown flag 'bogus'.
//! 2: invalid value for flag 'times': cannot convert 'many' to u8.
//! ```
//!
//! # Flags
//! Declare a flag via one of the typed [`Flag`] constructors, ex: [`Flag::u32`] or [`Flag::string_slice`].
//! Every scalar type (`String`, `bool`, each integer width, each float width) has a scalar constructor and a `_slice` counterpart.
//! Use [`Flag::with_parser`] for any other type (see [`prelude::Parser`]).
//!
//! Flags are optional by default; an absent flag delivers its default value.
//! Use [`Flag::required`] to report absence as an error instead.
//!
//! ### Syntax
//! * `--name` and `-name` are the same flag.
//! * `--name=value` gives an inline value; only the first `=` splits, so the value may itself contain `=`.
//! * `--name value` consumes the next token as the value, unless that token itself looks like a flag (ex: `-5`).
//! Use the inline form for values which start with `-`.
//! * A scalar flag given more than once is rejected, even across aliases.
//! A slice flag collects every occurrence, in input order.
//!
//! ### Booleans
//! [`Flag::bool`] also declares the alias `no-NAME`:
//! * `--verbose` is `true`, `--no-verbose` is `false`.
//! * `--verbose=false` is `false`, `--no-verbose=false` is `true`.
//!
//! # Destinations
//! Each flag delivers its value to a [`Destination`]: either a variable ([`Flag::to`]), or a callback ([`Flag::to_callback`]).
//! A callback may reject the value, which is reported as an [`FlagError::InvalidValue`].
//! A destination is never touched when its flag fails.
//!
//! # Behaviours
//! [`FlagSet::parse_with`] takes a set of [`ParseBehavior`]:
//! * [`ParseBehavior::Strict`]: unknown flags are reported as errors (they still pass through to the remainder).
//! * [`ParseBehavior::ReadOnly`]: the remainder is the original, unmodified input.
//!
//! # Errors
//! A failed parse returns [`ParseErrors`], which lists each [`FlagError`] (see [`ErrorKind`]) and still carries the remainder.
//!
//! # Features
//! * `tracing_debug`: emit `tracing::debug!` events while scanning and dispatching.

pub use flagbind_builder::*;
