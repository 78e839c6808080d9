// vim: set ai et ts=4 sw=4 sts=4:
use std::convert::TryFrom;
use std::fmt;
use ansi_term::ANSIString;

pub fn maybe_color(s: &ANSIString, emit_color: bool) -> String {
    match emit_color {
        true  => s.to_string(),
        false => (**s).to_string(), // deref once to get ANSIString, once more to get underlying str
    }
}

// A line is one row or column of a puzzle, modeled independently of any grid;
// the direction is carried along so log and error messages can identify it.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum Direction {
    Horizontal,
    Vertical,
}
impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match self {
            Direction::Horizontal => "Horizontal",
            Direction::Vertical   => "Vertical",
        })
    }
}
impl TryFrom<&str> for Direction {
    type Error = &'static str;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Horizontal" => Ok(Direction::Horizontal),
            "Vertical"   => Ok(Direction::Vertical),
            _            => Err("Not a valid Direction value")
        }
    }
}

#[cfg(test)]
mod tests {
    use std::convert::TryFrom;
    use ansi_term::Colour;
    use super::{maybe_color, Direction};

    #[test]
    fn direction_roundtrips_through_display() {
        for &d in &[Direction::Horizontal, Direction::Vertical] {
            assert_eq!(Direction::try_from(d.to_string().as_str()), Ok(d));
        }
        assert!(Direction::try_from("Diagonal").is_err());
    }

    #[test]
    fn maybe_color_strips_escapes_when_disabled() {
        let painted = Colour::Cyan.paint("x");
        assert_eq!(maybe_color(&painted, false), "x");
        assert!(maybe_color(&painted, true).len() > 1);
    }
}
