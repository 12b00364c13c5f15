/// A positional placeholder `$number`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamRef {
    pub number: usize,
    pub location: usize,
}

impl ParamRef {
    pub fn new(number: usize, location: usize) -> Self {
        Self { number, location }
    }
}
