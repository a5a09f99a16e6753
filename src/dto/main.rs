use crate::domain::banner::Banner;
use crate::pagination::Paginated;

/// Data required to render the home listing.
pub struct HomePageData {
    /// Banners of the requested page with the pager.
    pub banners: Paginated<Banner>,
    /// Total amount of banners on the board.
    pub total: usize,
}
