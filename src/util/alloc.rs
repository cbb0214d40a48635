use std::cell::Cell;
use std::rc::Rc;

/// A value that increments a shared counter when dropped, so that tests can check that a
/// collection drops every element exactly once.
#[derive(Debug)]
pub struct CountedDrop {
    /// An identifier to tell values apart in assertions.
    pub id: usize,
    counter: Rc<Cell<usize>>,
}

impl CountedDrop {
    /// Creates a value that reports its drop to `counter`.
    pub fn new(id: usize, counter: &Rc<Cell<usize>>) -> CountedDrop {
        CountedDrop {
            id,
            counter: Rc::clone(counter),
        }
    }
}

impl PartialEq for CountedDrop {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.counter.set(self.counter.get() + 1);
    }
}
