pub mod raffle_page;

pub use raffle_page::RafflePage;
