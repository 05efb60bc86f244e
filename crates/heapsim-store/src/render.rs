//! Console-style rendering of int sequences.

use std::fmt;

/// Write `[v0, v1, ...]` to `out`.
pub(crate) fn write_list<W, I>(out: &mut W, values: I) -> fmt::Result
where
    W: fmt::Write + ?Sized,
    I: IntoIterator<Item = i32>,
{
    out.write_char('[')?;
    for (i, v) in values.into_iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        write!(out, "{v}")?;
    }
    out.write_char(']')
}
