//! Live parameters: typed runtime variables exposed as commands.
//!
//! A `Parameter<T>` is a registered command that prints `name=value` when
//! invoked bare and stores a new value first when given an argument. The
//! `name=value` assignment syntax resolves to the same command, so both
//! spellings share one parse/print path.
//!
//! Conversions are deliberately lenient (see [`convert`]): malformed input
//! stores zero instead of failing.
//!
//! `bool` parameters are real flags, not small integers: any nonzero number
//! or `true` stores `true`, and the value always prints as `0` or `1`. Use a
//! `u8` parameter when the raw number matters.

pub mod convert;

use crate::command::{Command, Context};
use core::cell::Cell;
use core::fmt::{self, Write};

/// A value type that can back a live parameter.
pub trait ParamValue: Copy {
    /// Type name shown in `help`/`params` listings.
    const TYPE_NAME: &'static str;

    /// Convert user text; never fails.
    fn parse_lenient(text: &str) -> Self;

    /// Write the canonical textual form.
    fn write_value(&self, out: &mut dyn Write) -> fmt::Result;
}

impl ParamValue for f32 {
    const TYPE_NAME: &'static str = "f32";

    fn parse_lenient(text: &str) -> Self {
        let parsed = convert::parse_float(text);
        warn_inexact(parsed.exact, text);
        parsed.value as f32
    }

    fn write_value(&self, out: &mut dyn Write) -> fmt::Result {
        convert::write_general(out, f64::from(*self))
    }
}

impl ParamValue for f64 {
    const TYPE_NAME: &'static str = "f64";

    fn parse_lenient(text: &str) -> Self {
        let parsed = convert::parse_float(text);
        warn_inexact(parsed.exact, text);
        parsed.value
    }

    fn write_value(&self, out: &mut dyn Write) -> fmt::Result {
        convert::write_general(out, *self)
    }
}

/// Integers go through a saturating `i64` parse, then an `as` cast, which
/// wraps out-of-range values the way C's implicit conversion does.
macro_rules! int_param_value {
    ($($ty:ty),*) => {
        $(
            impl ParamValue for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);

                fn parse_lenient(text: &str) -> Self {
                    let parsed = convert::parse_int(text);
                    warn_inexact(parsed.exact, text);
                    parsed.value as $ty
                }

                fn write_value(&self, out: &mut dyn Write) -> fmt::Result {
                    write!(out, "{}", self)
                }
            }
        )*
    };
}

int_param_value!(i8, i16, i32, i64, u8, u16, u32, u64);

/// Booleans print as `0`/`1`. Any nonzero integer or the word `true` sets them.
impl ParamValue for bool {
    const TYPE_NAME: &'static str = "bool";

    fn parse_lenient(text: &str) -> Self {
        let word = text.trim();
        if word.eq_ignore_ascii_case("true") {
            return true;
        }
        if word.eq_ignore_ascii_case("false") {
            return false;
        }
        let parsed = convert::parse_int(text);
        warn_inexact(parsed.exact, text);
        parsed.value != 0
    }

    fn write_value(&self, out: &mut dyn Write) -> fmt::Result {
        out.write_str(if *self { "1" } else { "0" })
    }
}

fn warn_inexact(exact: bool, text: &str) {
    if !exact {
        log::warn!("lenient conversion of {:?}: unparsed text ignored", text);
    }
}

/// Typed runtime variable registered as a command.
///
/// The value lives in a `Cell`, so the host reads and tunes it between ticks
/// through a shared reference while the shell holds the same reference in
/// its registry.
///
/// ```rust,ignore
/// let gain = Parameter::new("gain", "Controller gain", 1.5f32);
/// shell.register(&gain)?;
/// // typing `gain=2` on the console updates it
/// let k = gain.get();
/// ```
pub struct Parameter<T: ParamValue> {
    name: &'static str,
    description: &'static str,
    value: Cell<T>,
}

impl<T: ParamValue> Parameter<T> {
    /// Create a parameter with its start value.
    pub const fn new(name: &'static str, description: &'static str, initial: T) -> Self {
        Self {
            name,
            description,
            value: Cell::new(initial),
        }
    }

    /// Current value.
    pub fn get(&self) -> T {
        self.value.get()
    }

    /// Overwrite the value.
    pub fn set(&self, value: T) {
        self.value.set(value);
    }
}

impl<T: ParamValue> Command for Parameter<T> {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn parameter_type(&self) -> Option<&str> {
        Some(T::TYPE_NAME)
    }

    fn execute(&self, ctx: &mut Context<'_, '_>, args: &[&str]) -> fmt::Result {
        if let Some(text) = args.first() {
            self.value.set(T::parse_lenient(text));
        }
        write!(ctx, "{}=", self.name)?;
        self.value.get().write_value(ctx)?;
        ctx.write_str("\n")
    }
}

impl<T: ParamValue + fmt::Debug> fmt::Debug for Parameter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parameter")
            .field("name", &self.name)
            .field("type", &T::TYPE_NAME)
            .field("value", &self.value.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;

    fn run<T: ParamValue>(param: &Parameter<T>, args: &[&str]) -> heapless::String<64> {
        let registry = Registry::new(1);
        let mut out = heapless::String::new();
        let mut echo = true;
        let mut ctx = Context::new(&mut out, &registry, &mut echo);
        param.execute(&mut ctx, args).unwrap();
        out
    }

    #[test]
    fn test_display_without_arguments() {
        let temp = Parameter::new("temp", "Temperature", 20.0f32);
        assert_eq!(run(&temp, &[]).as_str(), "temp=20\n");
        assert_eq!(temp.get(), 20.0);
    }

    #[test]
    fn test_set_then_display() {
        let temp = Parameter::new("temp", "Temperature", 20.0f32);
        assert_eq!(run(&temp, &["37.5"]).as_str(), "temp=37.5\n");
        assert_eq!(temp.get(), 37.5);
        assert_eq!(run(&temp, &[]).as_str(), "temp=37.5\n");
    }

    #[test]
    fn test_only_first_argument_used() {
        let count = Parameter::new("count", "Counter", 0i32);
        assert_eq!(run(&count, &["5", "9"]).as_str(), "count=5\n");
    }

    #[test]
    fn test_malformed_input_stores_default() {
        let count = Parameter::new("count", "Counter", 7i32);
        assert_eq!(run(&count, &["seven"]).as_str(), "count=0\n");

        let ratio = Parameter::new("ratio", "Ratio", 0.5f64);
        assert_eq!(run(&ratio, &["?"]).as_str(), "ratio=0\n");
    }

    #[test]
    fn test_integer_types() {
        let small = Parameter::new("small", "", 0u8);
        assert_eq!(run(&small, &["300"]).as_str(), "small=44\n");

        let wide = Parameter::new("wide", "", 0i64);
        assert_eq!(run(&wide, &["-9000000000"]).as_str(), "wide=-9000000000\n");

        let unsigned = Parameter::new("unsigned", "", 0u32);
        assert_eq!(run(&unsigned, &["-1"]).as_str(), "unsigned=4294967295\n");
    }

    #[test]
    fn test_bool_values() {
        let flag = Parameter::new("flag", "A flag", false);
        assert_eq!(run(&flag, &[]).as_str(), "flag=0\n");
        assert_eq!(run(&flag, &["1"]).as_str(), "flag=1\n");
        assert_eq!(run(&flag, &["0"]).as_str(), "flag=0\n");
        assert_eq!(run(&flag, &["2"]).as_str(), "flag=1\n");
        assert_eq!(run(&flag, &["true"]).as_str(), "flag=1\n");
        assert_eq!(run(&flag, &["nope"]).as_str(), "flag=0\n");
    }

    #[test]
    fn test_parameter_metadata() {
        let temp = Parameter::new("temp", "Temperature", 20.0f32);
        assert_eq!(temp.name(), "temp");
        assert_eq!(temp.description(), "Temperature");
        assert_eq!(temp.parameter_type(), Some("f32"));
        assert!(temp.is_parameter());

        assert_eq!(Parameter::new("n", "", 0u16).parameter_type(), Some("u16"));
        assert_eq!(Parameter::new("b", "", true).parameter_type(), Some("bool"));
    }

    #[test]
    fn test_host_side_access() {
        let gain = Parameter::new("gain", "Gain", 1.0f64);
        gain.set(2.25);
        assert_eq!(run(&gain, &[]).as_str(), "gain=2.25\n");
    }
}
