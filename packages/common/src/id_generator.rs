use crc32fast::Hasher;

/// Generate a page seed from a page name using CRC32
pub fn get_page_seed(name: &str) -> String {
    let mut buff = String::from(name);
    if !name.starts_with("page://") {
        buff = format!("page://{}", buff);
    }

    let mut hasher = Hasher::new();
    hasher.update(buff.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential ID generator for blocks within a page
#[derive(Debug, Clone)]
pub struct IDGenerator {
    seed: String, // Page seed (CRC32)
    count: u32,   // Sequential counter
}

impl IDGenerator {
    pub fn new(name: &str) -> Self {
        Self {
            seed: get_page_seed(name),
            count: 0,
        }
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Generate next sequential ID
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    /// Advance the counter past an existing id that carries this seed.
    ///
    /// Pages loaded from disk already contain ids; fresh ids must not
    /// collide with them.
    pub fn observe(&mut self, id: &str) {
        if let Some(rest) = id.strip_prefix(&self.seed) {
            if let Some(n) = rest.strip_prefix('-').and_then(|n| n.parse::<u32>().ok()) {
                self.count = self.count.max(n);
            }
        }
    }

    /// Get page seed
    pub fn seed(&self) -> &str {
        &self.seed
    }
}
