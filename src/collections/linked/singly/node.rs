pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

impl<T> Node<T> {
    pub fn boxed(value: T, next: Link<T>) -> Box<Node<T>> {
        Box::new(Node {
            value,
            next,
        })
    }
}
