use derive_more::Display;

///
/// Action
///
/// The four procedure variants emitted per table.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Action {
    Create,
    Get,
    Update,
    List,
}

impl Action {
    /// Every action, in emission order.
    pub const ALL: [Self; 4] = [Self::Create, Self::Get, Self::Update, Self::List];

    // keyword
    // upper-case form used in skip comments
    pub(crate) const fn keyword(self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Get => "GET",
            Self::Update => "UPDATE",
            Self::List => "LIST",
        }
    }
}
