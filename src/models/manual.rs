use std::fmt;

/// The three reference manuals the search index covers.
///
/// Each manual knows the fixed names of its resources: the `part` label used
/// in index data, the short id used on the command line, the JSON index file
/// and the PDF file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Manual {
    /// 建築編 (architecture volume)
    Kenchiku,
    /// 電気編 (electrical volume)
    Denki,
    /// 機械編 (mechanical volume)
    Kikai,
}

impl Manual {
    /// Fixed load order; the concatenated index always follows it.
    pub const ALL: [Manual; 3] = [Manual::Kenchiku, Manual::Denki, Manual::Kikai];

    /// Short identifier used by CLI arguments and manual shortcuts.
    pub fn id(self) -> &'static str {
        match self {
            Manual::Kenchiku => "kenchiku",
            Manual::Denki => "denki",
            Manual::Kikai => "kikai",
        }
    }

    /// The `part` label carried by index items belonging to this manual.
    pub fn label(self) -> &'static str {
        match self {
            Manual::Kenchiku => "建築編",
            Manual::Denki => "電気編",
            Manual::Kikai => "機械編",
        }
    }

    /// Name of the JSON index resource for this manual.
    pub fn index_file(self) -> &'static str {
        match self {
            Manual::Kenchiku => "spec-index-kenchiku.json",
            Manual::Denki => "spec-index-denki.json",
            Manual::Kikai => "spec-index-kikai.json",
        }
    }

    /// Name of the PDF resource for this manual.
    pub fn pdf_file(self) -> &'static str {
        match self {
            Manual::Kenchiku => "kenchiku.pdf",
            Manual::Denki => "denki.pdf",
            Manual::Kikai => "kikai.pdf",
        }
    }

    /// Resolve a short id (`"denki"`); unknown ids resolve to `None`.
    pub fn from_id(id: &str) -> Option<Manual> {
        Manual::ALL.into_iter().find(|m| m.id() == id)
    }

    /// Resolve a `part` label (`"電気編"`); unknown labels resolve to `None`.
    pub fn from_label(label: &str) -> Option<Manual> {
        Manual::ALL.into_iter().find(|m| m.label() == label)
    }
}

impl fmt::Display for Manual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
