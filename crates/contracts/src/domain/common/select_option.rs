/// Closed set of values offered by a select input
pub trait SelectOption: Sized + Copy + PartialEq + 'static {
    fn all() -> &'static [Self];

    /// Stored value, also used for filtering
    fn as_str(&self) -> &'static str;

    /// Text shown to the user
    fn label(&self) -> &'static str {
        self.as_str()
    }

    fn parse(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.as_str() == value)
    }
}
