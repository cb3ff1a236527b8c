use smallvec::SmallVec;

/// Default number of pointer samples kept in the trail.
pub const TRAIL_CAPACITY: usize = 16;

/// One recorded pointer position, in viewport pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailSample {
    pub x: f32,
    pub y: f32,
}

/// Fixed-capacity, insertion-ordered history of pointer positions.
///
/// Appending beyond capacity evicts exactly the oldest sample. Recency (the
/// sample's position in the sequence) drives rendered blob size and opacity.
pub struct TrailBuffer {
    samples: SmallVec<[TrailSample; TRAIL_CAPACITY]>,
    capacity: usize,
}

impl TrailBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: SmallVec::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn push(&mut self, x: f32, y: f32) {
        self.samples.push(TrailSample { x, y });
        while self.samples.len() > self.capacity {
            self.samples.remove(0);
        }
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Samples oldest-first, each paired with its recency weight in
    /// `[0, 1)` — oldest closest to zero, newest closest to one.
    pub fn iter(&self) -> impl Iterator<Item = (TrailSample, f32)> + '_ {
        let cap = self.capacity as f32;
        self.samples
            .iter()
            .enumerate()
            .map(move |(i, s)| (*s, i as f32 / cap))
    }
}

/// Blob diameter for a recency weight.
pub fn blob_size(recency: f32) -> f32 {
    14.0 + recency * 12.0
}

/// Blob opacity for a recency weight.
pub fn blob_opacity(recency: f32) -> f32 {
    0.15 + recency * 0.35
}
