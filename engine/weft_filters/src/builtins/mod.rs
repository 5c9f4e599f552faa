//! The built-in filter catalogue.
//!
//! Filters are grouped by concern:
//!
//! - [`strings`]: casing, padding, truncation, character-level transforms
//! - [`html`]: escaping, tag stripping, URL encoding
//! - [`numbers`]: arithmetic, numeric formatting, pluralization
//! - [`sequences`]: element access, joining, length, random choice
//! - [`logic`]: fallback selection (`default`, `yesno`, ...)
//! - [`datetime`]: strftime formatting of date/time values
//! - [`format`]: printf-style `stringformat`
//!
//! Every filter shares the [`FilterFn`](crate::FilterFn) signature; a filter
//! that takes no parameter receives `Value::Nil` and must not fault on it.

pub mod datetime;
pub mod format;
pub mod html;
pub mod logic;
pub mod numbers;
pub mod sequences;
pub mod strings;

use crate::registry::FilterFn;

/// The full builtin catalogue as `(name, function)` pairs, sorted by name.
///
/// `time` is an alias registered to the same function as `date` (both take
/// a strftime format string). `FilterRegistry::with_builtins` installs every
/// entry; a registry test asserts the names are unique.
pub(crate) const BUILTIN_FILTERS: &[(&str, FilterFn)] = &[
    ("add", numbers::add),
    ("addslashes", strings::addslashes),
    ("capfirst", strings::capfirst),
    ("center", strings::center),
    ("cut", strings::cut),
    ("date", datetime::date),
    ("default", logic::default),
    ("default_if_none", logic::default_if_none),
    ("divisibleby", numbers::divisibleby),
    ("escape", html::escape),
    ("first", sequences::first),
    ("float", numbers::float),
    ("floatformat", numbers::floatformat),
    ("get_digit", strings::get_digit),
    ("integer", numbers::integer),
    ("join", sequences::join),
    ("last", sequences::last),
    ("length", sequences::length),
    ("length_is", sequences::length_is),
    ("linebreaksbr", html::linebreaksbr),
    ("ljust", strings::ljust),
    ("lower", strings::lower),
    ("make_list", strings::make_list),
    ("pluralize", numbers::pluralize),
    ("random", sequences::random),
    ("removetags", html::removetags),
    ("rjust", strings::rjust),
    ("safe", html::safe),
    ("stringformat", format::stringformat),
    ("striptags", html::striptags),
    ("time", datetime::date),
    ("title", strings::title),
    ("truncatechars", strings::truncatechars),
    ("upper", strings::upper),
    ("urlencode", html::urlencode),
    ("wordcount", strings::wordcount),
    ("yesno", logic::yesno),
];
