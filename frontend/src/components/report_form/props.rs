use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ReportFormProps {
    /// Serial of the report to edit. `None` (or blank) opens an empty form that creates one.
    #[prop_or_default]
    pub serial: Option<String>,
}
