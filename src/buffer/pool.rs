//! Thread-local pool of fixed-size read buffers.

use std::cell::RefCell;

/// Size of each pooled read buffer.
pub const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Maximum number of buffers to keep per thread.
const MAX_POOL_SIZE: usize = 4;

/// A reusable read buffer, returned to the pool on drop.
pub struct Buffer {
    data: Vec<u8>,
}

impl Buffer {
    /// Takes a buffer from the thread-local pool or allocates a new one.
    ///
    /// The buffer is always `READ_BUFFER_SIZE` bytes long, ready to be used
    /// as a read target.
    pub fn take() -> Self {
        READ_BUFFER_POOL.with(|pool| {
            let data = pool
                .borrow_mut()
                .pop()
                .unwrap_or_else(|| vec![0u8; READ_BUFFER_SIZE]);
            Self { data }
        })
    }

    /// Returns the buffer as a mutable slice for reading into.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Returns the buffer contents.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        if self.data.len() != READ_BUFFER_SIZE {
            return;
        }
        READ_BUFFER_POOL.with(|pool| {
            let mut pool = pool.borrow_mut();
            if pool.len() < MAX_POOL_SIZE {
                pool.push(std::mem::take(&mut self.data));
            }
        });
    }
}

thread_local! {
    static READ_BUFFER_POOL: RefCell<Vec<Vec<u8>>> = const { RefCell::new(Vec::new()) };
}
