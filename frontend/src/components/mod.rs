pub mod banner;
pub mod confirm_dialog;
pub mod notification;
pub mod report_form;
pub mod reports;
pub mod subscription;
