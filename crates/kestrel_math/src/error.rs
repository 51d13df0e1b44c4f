use core::fmt;

/// Math error
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Error {
    /// Matrix can't be inverted, as its determinant is 0
    SingularMatrix{ determinant: f32 },
    /// Input that has no meaningful result, like parallel lines or zero-length directions
    DegenerateInput(&'static str),
    /// Direction or normal that was expected to have a length of 1
    NonUnitDirection(&'static str, f32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SingularMatrix { determinant } => f.write_fmt(format_args!("Singular matrix, determinant is {determinant}")),
            Error::DegenerateInput(s)             => f.write_fmt(format_args!("Degenerate input: {s}")),
            Error::NonUnitDirection(name, len)    => f.write_fmt(format_args!("Direction '{name}' is not unit length, found length {len}")),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn display() {
        assert_eq!(Error::SingularMatrix { determinant: 0.0 }.to_string(), "Singular matrix, determinant is 0");
        assert_eq!(Error::DegenerateInput("parallel lines").to_string(), "Degenerate input: parallel lines");
        assert_eq!(Error::NonUnitDirection("cone.direction", 2.0).to_string(), "Direction 'cone.direction' is not unit length, found length 2");
    }
}
