use super::DataStore;
use crate::book::Model;
use crate::error::Result;

/// Keeps the serialized model in memory. Used by tests and dry runs.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    model: Model,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(model: Model) -> Self {
        Self { model, saves: 0 }
    }

    /// Number of times the model has been written back.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Model> {
        Ok(self.model.clone())
    }

    fn save(&mut self, model: &Model) -> Result<()> {
        self.model = model.clone();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::book::AddressBook;
    use crate::model::Employee;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        book: AddressBook,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                book: AddressBook::new(),
            }
        }

        pub fn with_employee(mut self, name: &str, payroll: u64, leave_count: u64) -> Self {
            let id = self.book.next_id();
            self.book.mutate(|list| {
                list.push(Employee::new(id, name.to_string(), payroll, leave_count))
            });
            self.store = InMemoryStore::with_model(Model::new(self.book.clone()));
            self
        }

        /// Three employees with ids 1..=3 and payrolls 1000, 3000, 5000.
        pub fn with_staff(self) -> Self {
            self.with_employee("Alex Yeoh", 1000, 1)
                .with_employee("Bernice Yu", 3000, 4)
                .with_employee("Charlotte Oliveiro", 5000, 2)
        }

        pub fn model(&self) -> Model {
            Model::new(self.book.clone())
        }
    }
}
