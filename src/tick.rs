use fugit::MicrosDurationU32;

/// A periodic timer that raises one notification per period once enabled.
pub trait TickSource {
    type Error;

    /// Set the interval between notifications. Takes effect on the next
    /// [`TickSource::enable`].
    fn configure(&mut self, period: MicrosDurationU32);

    fn enable(&mut self) -> Result<(), Self::Error>;
}
