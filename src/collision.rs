use crate::grid::Position;

/// Anything that occupies a single grid cell.
pub trait Positioned {
    fn position(&self) -> Position;
}

impl Positioned for Position {
    fn position(&self) -> Position {
        *self
    }
}

/// Returns true when both entities occupy the same cell.
#[must_use]
pub fn collides<A, B>(a: &A, b: &B) -> bool
where
    A: Positioned + ?Sized,
    B: Positioned + ?Sized,
{
    a.position() == b.position()
}
