use diesel::prelude::*;
use qtty::Degrees;

use super::schema::schools;
use crate::models::{NewSchool, School, SchoolId};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = schools)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SchoolRow {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<SchoolRow> for School {
    fn from(row: SchoolRow) -> Self {
        School {
            id: SchoolId(row.id),
            name: row.name,
            address: row.address,
            latitude: Degrees::new(row.latitude),
            longitude: Degrees::new(row.longitude),
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schools)]
pub struct NewSchoolRow {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&NewSchool> for NewSchoolRow {
    fn from(school: &NewSchool) -> Self {
        NewSchoolRow {
            name: school.name.clone(),
            address: school.address.clone(),
            latitude: school.location.latitude.value(),
            longitude: school.location.longitude.value(),
        }
    }
}
