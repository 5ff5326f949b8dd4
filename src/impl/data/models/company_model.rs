use crate::entities::{Company, CompanyId};

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct CompanyModel {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub tax_id: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl Into<Company> for CompanyModel {
    fn into(self) -> Company {
        Company {
            id: CompanyId(self.id),
            name: self.name,
            tax_id: self.tax_id,
            phone: self.phone,
            email: self.email,
            address: self.address,
        }
    }
}
