#![deny(warnings)]

/// Buffered cursor over an iterator that can backtrack over anything it
/// has already pulled from the source.
pub struct Scanner<I: Iterator>
where
    I::Item: Clone,
{
    src: I,
    buf: Vec<I::Item>,
    pos: isize,
}

impl<I> Iterator for Scanner<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        self.pos += 1;
        self.fill_buffer();
        let blen = self.buf.len() as isize;
        if self.pos >= blen {
            self.pos = blen;
        }
        self.current()
    }
}

impl<I> Scanner<I>
where
    I: Iterator,
    I::Item: Clone,
{
    pub fn new(source: I) -> Self {
        Scanner { src: source, buf: Vec::new(), pos: -1 }
    }

    pub fn current(&self) -> Option<I::Item> {
        if self.pos < 0 {
            return None;
        }
        self.buf.get(self.pos as usize).cloned()
    }

    // pull from the source until the buffer covers self.pos
    fn fill_buffer(&mut self) {
        while self.pos >= (self.buf.len() as isize) {
            match self.src.next() {
                Some(item) => self.buf.push(item),
                None => break,
            }
        }
    }

    pub fn peek(&mut self) -> Option<I::Item> {
        let backtrack = self.pos;
        let peeked = self.next();
        self.pos = backtrack;
        peeked
    }

    /// Items consumed since the last `ignore`/`extract`.
    pub fn view(&self) -> &[I::Item] {
        let n = ((self.pos + 1) as usize).min(self.buf.len());
        &self.buf[..n]
    }

    /// Drop everything consumed so far, the next item starts a new view.
    pub fn ignore(&mut self) {
        if self.pos >= 0 {
            let n = ((self.pos + 1) as usize).min(self.buf.len());
            self.buf.drain(..n);
        }
        self.pos = -1;
    }

    pub fn extract(&mut self) -> Vec<I::Item> {
        let items = self.view().to_vec();
        self.ignore();
        items
    }

    pub fn accept_if<F>(&mut self, pred: F) -> Option<I::Item>
    where
        F: Fn(&I::Item) -> bool,
    {
        let backtrack = self.pos;
        if let Some(next) = self.next() {
            if pred(&next) {
                return Some(next);
            }
        }
        self.pos = backtrack;
        None
    }

    pub fn skip_while<F>(&mut self, pred: F) -> bool
    where
        F: Fn(&I::Item) -> bool,
    {
        let mut advanced = false;
        while self.accept_if(&pred).is_some() {
            advanced = true;
        }
        advanced
    }

    // Advance while the next item doesn't satisfy 'pred' (or until EOF)
    pub fn until<F>(&mut self, pred: F) -> bool
    where
        F: Fn(&I::Item) -> bool,
    {
        let mut advanced = false;
        while let Some(next) = self.peek() {
            if pred(&next) {
                break;
            }
            self.next();
            advanced = true;
        }
        advanced
    }
}
