use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{kid::KidPublic, patch::Patch};

/// Stored row of the `parent` table. Kids are read from `parentkidlink` on demand.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Parent {
    pub id: i64,
    pub name_and_surname: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentBase {
    pub name_and_surname: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParentCreate {
    #[serde(flatten)]
    pub base: ParentBase,
    /// Existing kids to link right after the parent is stored. `null` behaves like `[]`.
    #[serde(default)]
    pub kid_ids: Option<Vec<i64>>,
}

impl ParentCreate {
    pub fn kid_ids(&self) -> &[i64] {
        self.kid_ids.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParentUpdate {
    #[serde(default)]
    pub name_and_surname: Patch<String>,
    #[serde(default)]
    pub email: Patch<String>,
}

impl ParentUpdate {
    pub fn apply_to(&self, parent: &mut Parent) {
        self.name_and_surname.apply_to(&mut parent.name_and_surname);
        self.email.apply_to(&mut parent.email);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentPublic {
    pub id: i64,
    pub name_and_surname: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentPublicDetailed {
    pub id: i64,
    pub name_and_surname: String,
    pub email: String,
    pub kids: Vec<KidPublic>,
}

impl Parent {
    pub fn detailed(self, kids: Vec<KidPublic>) -> ParentPublicDetailed {
        ParentPublicDetailed {
            id: self.id,
            name_and_surname: self.name_and_surname,
            email: self.email,
            kids,
        }
    }
}

impl From<Parent> for ParentPublic {
    fn from(parent: Parent) -> Self {
        ParentPublic {
            id: parent.id,
            name_and_surname: parent.name_and_surname,
            email: parent.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_email_only() {
        let mut parent = Parent {
            id: 9,
            name_and_surname: "Bo Lee".into(),
            email: "bo@example.com".into(),
        };
        let req: ParentUpdate = serde_json::from_str(r#"{"email":"bo.lee@example.com"}"#).unwrap();
        req.apply_to(&mut parent);
        assert_eq!(parent.name_and_surname, "Bo Lee");
        assert_eq!(parent.email, "bo.lee@example.com");
    }

    #[test]
    fn test_create_reads_kid_ids() {
        let req: ParentCreate = serde_json::from_str(
            r#"{"name_and_surname":"Bo Lee","email":"bo@example.com","kid_ids":[5,6]}"#,
        )
        .unwrap();
        assert_eq!(req.kid_ids(), &[5, 6]);
        assert_eq!(req.base.email, "bo@example.com");
    }
}
