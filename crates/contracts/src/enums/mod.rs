pub mod guide_status;
pub mod payment_status;
pub mod price_band;
pub mod reservation_status;
pub mod store_status;

pub use guide_status::GuideStatus;
pub use payment_status::PaymentStatus;
pub use price_band::PriceBand;
pub use reservation_status::ReservationStatus;
pub use store_status::StoreStatus;
