use once_cell::sync::OnceCell;

use crate::db::builder::ObjectDbBuilder;
use crate::db::store::{DbError, ObjectDb};

/// Write-once handle to a process-wide object database.
///
/// ```rust
/// use sky_xref::db::{ObjectDbBuilder, SharedObjectDb};
///
/// static OBJECTS: SharedObjectDb = SharedObjectDb::new();
///
/// assert!(OBJECTS.get().is_none());
/// OBJECTS.initialize(ObjectDbBuilder::new()).unwrap();
/// assert!(OBJECTS.initialize(ObjectDbBuilder::new()).is_err());
/// ```
#[derive(Debug, Default)]
pub struct SharedObjectDb {
    cell: OnceCell<ObjectDb>,
}

impl SharedObjectDb {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Freeze `builder` and publish the result.
    ///
    /// # Errors
    ///
    /// `DbError::AlreadyInitialized` on every call after the first success.
    pub fn initialize(&self, builder: ObjectDbBuilder) -> Result<&ObjectDb, DbError> {
        if self.cell.get().is_some() {
            return Err(DbError::AlreadyInitialized);
        }
        self.cell
            .set(builder.build())
            .map_err(|_| DbError::AlreadyInitialized)?;
        self.cell.get().ok_or(DbError::AlreadyInitialized)
    }

    /// Initialize from a loader unless already initialized
    ///
    /// # Errors
    ///
    /// Propagates the loader's error.
    pub fn get_or_try_init<F>(&self, load: F) -> Result<&ObjectDb, DbError>
    where
        F: FnOnce() -> Result<ObjectDb, DbError>,
    {
        self.cell.get_or_try_init(load)
    }

    pub fn get(&self) -> Option<&ObjectDb> {
        self.cell.get()
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode;
    use crate::core::object::CelestialObject;
    use crate::core::types::ObjectType;

    #[test]
    fn test_initialize_once() {
        let shared = SharedObjectDb::new();
        let mut builder = ObjectDbBuilder::new();
        builder.add_object(CelestialObject::new(encode("NGC 224").unwrap(), ObjectType::Galaxy));

        assert_eq!(shared.initialize(builder).unwrap().len(), 1);
        assert!(shared.is_initialized());
        assert!(matches!(
            shared.initialize(ObjectDbBuilder::new()),
            Err(DbError::AlreadyInitialized)
        ));
        assert_eq!(shared.get().map(ObjectDb::len), Some(1));
    }

    #[test]
    fn test_concurrent_readers() {
        let shared = SharedObjectDb::new();
        let mut builder = ObjectDbBuilder::new();
        builder.add_object(CelestialObject::new(encode("NGC 224").unwrap(), ObjectType::Galaxy));
        builder.add_cross_reference(encode("NGC 224").unwrap(), encode("M31").unwrap());
        shared.initialize(builder).unwrap();

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    let db = shared.get().unwrap();
                    assert!(db.try_lookup_by_name("M31").is_some());
                    assert_eq!(db.catalogs().len(), 2);
                });
            }
        });
    }
}
