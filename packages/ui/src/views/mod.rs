mod modal_overlay;
pub use modal_overlay::{ConfirmDialog, DetailsDialog, ModalOverlay};

mod home;
pub use home::Home;

mod classes;
pub use classes::Classes;

mod trainers;
pub use trainers::Trainers;

mod memberships;
pub use memberships::Memberships;

mod checkout;
pub use checkout::Checkout;

mod dashboard;
pub use dashboard::Dashboard;

mod sign_in;
pub use sign_in::SignIn;

mod not_found;
pub use not_found::NotFound;
