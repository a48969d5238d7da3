mod activity;
mod job_role;
mod payment;
mod shirt;
mod validation;

pub use activity::Activity;
pub use job_role::JobRole;
pub use payment::PaymentMethod;
pub use shirt::{ColorOption, Design};
pub use validation::{
    ValidationError, is_card_number, is_cvv, is_email_shaped, is_zip_code, validate_activities,
    validate_card_details, validate_email, validate_name,
};
