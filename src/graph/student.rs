//! Student input record.
//!
//! Students are the entities the layout engine operates on. Each record
//! carries a unique name, the school of origin, and up to four friend
//! request fields naming other students. Everything else the frontend
//! tracks (gender, grades, seating constraints) stays on the JS side and
//! is joined back by name after layout.

use serde::{Deserialize, Serialize};

/// One student record as handed across the WASM boundary.
///
/// Friend fields may be empty strings; the graph builder filters blanks,
/// names that resolve to no student in the same batch, and self-references.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Unique display name, used as the node id and relation key.
    pub name: String,
    /// School of origin. Opaque to the engine, carried for the caller.
    #[serde(default)]
    pub school: String,
    /// First friend request (may be empty).
    #[serde(default)]
    pub friend1: String,
    /// Second friend request (may be empty).
    #[serde(default)]
    pub friend2: String,
    /// Third friend request (may be empty).
    #[serde(default)]
    pub friend3: String,
    /// Fourth friend request (may be empty).
    #[serde(default)]
    pub friend4: String,
}

impl Student {
    /// The four friend request fields in declaration order.
    pub fn friend_names(&self) -> [&str; 4] {
        [&self.friend1, &self.friend2, &self.friend3, &self.friend4]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_friend_names_order() {
        let student = Student {
            name: "Alice".into(),
            school: "North".into(),
            friend1: "Bob".into(),
            friend2: String::new(),
            friend3: "Cara".into(),
            friend4: String::new(),
        };

        assert_eq!(student.friend_names(), ["Bob", "", "Cara", ""]);
    }

    #[test]
    fn test_deserialize_partial_record() {
        // Grid rows with unfilled friend cells come across without those keys.
        let json = r#"{"name": "Dana"}"#;
        let student: Student = serde_json::from_str(json).unwrap();

        assert_eq!(student.name, "Dana");
        assert_eq!(student.school, "");
        assert_eq!(student.friend_names(), ["", "", "", ""]);
    }
}
