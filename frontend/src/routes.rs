/// Pages served by this bundle, chosen from `location.pathname`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Packages,
    Signup,
    Signin,
    Payment,
    Confirmation,
    ReportForm,
    Reports,
    NotFound,
}

impl Page {
    pub fn from_path(path: &str) -> Page {
        match path.trim_end_matches('/') {
            "" | "/index.html" => Page::Packages,
            "/signup" => Page::Signup,
            "/signin" => Page::Signin,
            "/payment" => Page::Payment,
            "/confirmation" => Page::Confirmation,
            "/radiology" | "/radiology/index.html" => Page::ReportForm,
            "/radiology/reports.html" => Page::Reports,
            _ => Page::NotFound,
        }
    }
}
