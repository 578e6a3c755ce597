use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{parent::ParentPublic, patch::Patch};

/// Stored row of the `kid` table. Parents are read from `parentkidlink` on demand.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Kid {
    pub id: i64,
    pub name: String,
    pub first_surname: String,
    pub second_surname: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KidBase {
    pub name: String,
    pub first_surname: String,
    pub second_surname: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KidCreate {
    #[serde(flatten)]
    pub base: KidBase,
    /// Existing parents to link right after the kid is stored. `null` behaves like `[]`.
    #[serde(default)]
    pub parent_ids: Option<Vec<i64>>,
}

impl KidCreate {
    pub fn parent_ids(&self) -> &[i64] {
        self.parent_ids.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct KidUpdate {
    #[serde(default)]
    pub name: Patch<String>,
    #[serde(default)]
    pub first_surname: Patch<String>,
    #[serde(default)]
    pub second_surname: Patch<String>,
}

impl KidUpdate {
    pub fn apply_to(&self, kid: &mut Kid) {
        self.name.apply_to(&mut kid.name);
        self.first_surname.apply_to(&mut kid.first_surname);
        self.second_surname.apply_to(&mut kid.second_surname);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KidPublic {
    pub id: i64,
    pub name: String,
    pub first_surname: String,
    pub second_surname: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KidPublicDetailed {
    pub id: i64,
    pub name: String,
    pub first_surname: String,
    pub second_surname: String,
    pub parents: Vec<ParentPublic>,
}

impl Kid {
    pub fn detailed(self, parents: Vec<ParentPublic>) -> KidPublicDetailed {
        KidPublicDetailed {
            id: self.id,
            name: self.name,
            first_surname: self.first_surname,
            second_surname: self.second_surname,
            parents,
        }
    }
}

impl From<Kid> for KidPublic {
    fn from(kid: Kid) -> Self {
        KidPublic {
            id: kid.id,
            name: kid.name,
            first_surname: kid.first_surname,
            second_surname: kid.second_surname,
        }
    }
}
