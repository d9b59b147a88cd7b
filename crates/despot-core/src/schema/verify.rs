use super::Schema;
use crate::{Error, Result};

struct Verify<'a> {
    schema: &'a Schema,
}

impl Schema {
    pub(super) fn verify(&self) -> Result<()> {
        Verify { schema: self }.verify()
    }
}

impl Verify<'_> {
    fn verify(&self) -> Result<()> {
        self.verify_names_are_non_empty()?;
        self.verify_foreign_keys_point_elsewhere()?;
        Ok(())
    }

    fn verify_names_are_non_empty(&self) -> Result<()> {
        for (name, prop) in self.schema.props() {
            if name.is_empty() {
                return Err(Error::invalid_schema("property name is empty"));
            }

            if let Some(foreign_key) = &prop.foreign_key {
                if foreign_key.is_empty() {
                    return Err(Error::invalid_schema(format!(
                        "foreign key for `{name}` is empty"
                    )));
                }
            }
        }

        Ok(())
    }

    fn verify_foreign_keys_point_elsewhere(&self) -> Result<()> {
        for (name, prop) in self.schema.props() {
            if prop.foreign_key.as_deref() == Some(name) {
                return Err(Error::invalid_schema(format!(
                    "foreign key for `{name}` references itself"
                )));
            }
        }

        Ok(())
    }
}
