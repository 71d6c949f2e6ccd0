use std::ops::Deref;

use self::{definition::AbstractDatabase, dummy::DummyDb};

pub mod definition;

mod dummy;
mod mongo;

pub use dummy::DummyDb as Dummy;
pub use mongo::MongoDb;

#[derive(Debug)]
#[allow(non_camel_case_types)]
pub enum Migration {
    M2026_01_10EnsureUpToSpec,
    #[cfg(debug_assertions)]
    WipeAll,
}

#[derive(Clone)]
pub enum Database {
    Dummy(DummyDb),
    MongoDb(mongo::MongoDb),
}

impl Default for Database {
    fn default() -> Self {
        Self::Dummy(DummyDb::default())
    }
}

impl Deref for Database {
    type Target = dyn AbstractDatabase;

    fn deref(&self) -> &Self::Target {
        match self {
            Database::Dummy(dummy) => dummy,
            Database::MongoDb(mongo) => mongo,
        }
    }
}
