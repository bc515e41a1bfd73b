use serde::{Deserialize, Serialize};

/// Publication category attached to a dataset.
///
/// The wire value is the lowercase deposit token used by the category select
/// and by search requests; `display_name` is the label shown on cards and in
/// the dropdown options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PublicationType {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "annotationcollection")]
    AnnotationCollection,
    #[serde(rename = "book")]
    Book,
    #[serde(rename = "section")]
    BookSection,
    #[serde(rename = "conferencepaper")]
    ConferencePaper,
    #[serde(rename = "datamanagementplan")]
    DataManagementPlan,
    #[serde(rename = "article")]
    JournalArticle,
    #[serde(rename = "patent")]
    Patent,
    #[serde(rename = "preprint")]
    Preprint,
    #[serde(rename = "deliverable")]
    ProjectDeliverable,
    #[serde(rename = "milestone")]
    ProjectMilestone,
    #[serde(rename = "proposal")]
    Proposal,
    #[serde(rename = "report")]
    Report,
    #[serde(rename = "softwaredocumentation")]
    SoftwareDocumentation,
    #[serde(rename = "taxonomictreatment")]
    TaxonomicTreatment,
    #[serde(rename = "technicalnote")]
    TechnicalNote,
    #[serde(rename = "thesis")]
    Thesis,
    #[serde(rename = "workingpaper")]
    WorkingPaper,
    #[serde(rename = "other")]
    Other,
}

impl PublicationType {
    /// Declaration order doubles as the option order of the category select.
    pub const ALL: [PublicationType; 19] = [
        PublicationType::None,
        PublicationType::AnnotationCollection,
        PublicationType::Book,
        PublicationType::BookSection,
        PublicationType::ConferencePaper,
        PublicationType::DataManagementPlan,
        PublicationType::JournalArticle,
        PublicationType::Patent,
        PublicationType::Preprint,
        PublicationType::ProjectDeliverable,
        PublicationType::ProjectMilestone,
        PublicationType::Proposal,
        PublicationType::Report,
        PublicationType::SoftwareDocumentation,
        PublicationType::TaxonomicTreatment,
        PublicationType::TechnicalNote,
        PublicationType::Thesis,
        PublicationType::WorkingPaper,
        PublicationType::Other,
    ];

    pub fn wire_value(&self) -> &'static str {
        match self {
            PublicationType::None => "none",
            PublicationType::AnnotationCollection => "annotationcollection",
            PublicationType::Book => "book",
            PublicationType::BookSection => "section",
            PublicationType::ConferencePaper => "conferencepaper",
            PublicationType::DataManagementPlan => "datamanagementplan",
            PublicationType::JournalArticle => "article",
            PublicationType::Patent => "patent",
            PublicationType::Preprint => "preprint",
            PublicationType::ProjectDeliverable => "deliverable",
            PublicationType::ProjectMilestone => "milestone",
            PublicationType::Proposal => "proposal",
            PublicationType::Report => "report",
            PublicationType::SoftwareDocumentation => "softwaredocumentation",
            PublicationType::TaxonomicTreatment => "taxonomictreatment",
            PublicationType::TechnicalNote => "technicalnote",
            PublicationType::Thesis => "thesis",
            PublicationType::WorkingPaper => "workingpaper",
            PublicationType::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PublicationType::None => "None",
            PublicationType::AnnotationCollection => "Annotation Collection",
            PublicationType::Book => "Book",
            PublicationType::BookSection => "Book Section",
            PublicationType::ConferencePaper => "Conference Paper",
            PublicationType::DataManagementPlan => "Data Management Plan",
            PublicationType::JournalArticle => "Journal Article",
            PublicationType::Patent => "Patent",
            PublicationType::Preprint => "Preprint",
            PublicationType::ProjectDeliverable => "Project Deliverable",
            PublicationType::ProjectMilestone => "Project Milestone",
            PublicationType::Proposal => "Proposal",
            PublicationType::Report => "Report",
            PublicationType::SoftwareDocumentation => "Software Documentation",
            PublicationType::TaxonomicTreatment => "Taxonomic Treatment",
            PublicationType::TechnicalNote => "Technical Note",
            PublicationType::Thesis => "Thesis",
            PublicationType::WorkingPaper => "Working Paper",
            PublicationType::Other => "Other",
        }
    }

    /// Look up a category by its wire token. "any" and unknown tokens yield
    /// `None`, which disables category filtering.
    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.wire_value() == value)
    }

    /// Look up a category by its visible label, as clicked on a card badge.
    pub fn from_display_name(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|t| t.display_name() == label)
    }
}
