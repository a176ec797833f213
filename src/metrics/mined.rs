// Package metrics: record of blocks mined by this node.

use parking_lot::Mutex;
use tracing::debug;

/// Hash of a mined block.
pub type BlockHash = [u8; 32];

/// Blocks mined by this node during the current process, oldest first.
/// Volatile: the record does not survive a restart.
pub struct MinedBlocks {
    hashes: Mutex<Vec<BlockHash>>,
}

impl MinedBlocks {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self {
            hashes: Mutex::new(Vec::new()),
        }
    }

    /// Records a freshly mined block.
    pub fn track(&self, hash: BlockHash) {
        debug!(block = %hex::encode(hash), "tracked mined block");
        self.hashes.lock().push(hash);
    }

    /// Number of blocks mined so far.
    pub fn len(&self) -> usize {
        self.hashes.lock().len()
    }

    /// Whether no block has been mined yet.
    pub fn is_empty(&self) -> bool {
        self.hashes.lock().is_empty()
    }

    /// Snapshot of the mined block hashes, oldest first.
    pub fn hashes(&self) -> Vec<BlockHash> {
        self.hashes.lock().clone()
    }
}

impl Default for MinedBlocks {
    fn default() -> Self {
        Self::new()
    }
}
