/// 添字付き最小優先度付きキューの操作
///
/// Prim法はこのトレイトだけを通して優先度付きキューを扱うので, 実装を差し替えられる.
pub trait IndexedMinPriorityQueue {
    /// キー`0..n`を扱える空のキューを作る.
    #[must_use]
    fn with_capacity(n: usize) -> Self
    where
        Self: Sized;

    /// キー`key`を優先度`priority`で追加する. `key`はまだキューに無い必要がある.
    fn insert(&mut self, key: usize, priority: f64);

    /// キュー内のキー`key`の優先度を`priority`に下げる.
    fn decrease_key(&mut self, key: usize, priority: f64);

    /// 優先度が最小のキーを削除して返す. 空なら`None`を返す.
    fn extract_min(&mut self) -> Option<usize>;

    #[must_use]
    fn is_empty(&self) -> bool;
}

/// 二分ヒープによる添字付き最小優先度付きキュー
///
/// キーは`0..capacity`の整数で, キーごとに`f64`の優先度を持つ.
/// 優先度は`f64::total_cmp`で比較する.
#[derive(Clone, Debug, Default)]
pub struct IndexMinPq {
    // ヒープ上の各位置にあるキー
    heap: Vec<usize>,
    // 各キーのヒープ上の位置 (キューに無ければNone)
    position: Box<[Option<usize>]>,
    priority: Box<[f64]>,
}

impl IndexMinPq {
    /// キー`0..capacity`を扱える空のキューを作る.
    ///
    /// # Time complexity
    ///
    /// - *O*(`capacity`)
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            position: vec![None; capacity].into_boxed_slice(),
            priority: vec![f64::INFINITY; capacity].into_boxed_slice(),
        }
    }

    /// 扱えるキーの個数を返す.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.position.len()
    }

    /// キューにあるキーの個数を返す.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// キー`key`がキューにあるか判定する.
    #[must_use]
    pub fn contains(&self, key: usize) -> bool {
        self.position.get(key).is_some_and(Option::is_some)
    }

    /// キー`key`の優先度を返す. キューに無ければ`None`を返す.
    #[must_use]
    pub fn priority(&self, key: usize) -> Option<f64> {
        self.contains(key).then(|| self.priority[key])
    }

    /// 優先度が最小のキーとその優先度を返す.
    #[must_use]
    pub fn peek(&self) -> Option<(usize, f64)> {
        self.heap.first().map(|&key| (key, self.priority[key]))
    }

    /// キー`key`を優先度`priority`で追加する.
    ///
    /// # Constraints
    ///
    /// - `key < self.capacity()`
    /// - `!self.contains(key)`
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    pub fn insert(&mut self, key: usize, priority: f64) {
        debug_assert!(key < self.capacity());
        debug_assert!(!self.contains(key));
        let i = self.heap.len();
        self.heap.push(key);
        self.position[key] = Some(i);
        self.priority[key] = priority;
        self.sift_up(i);
    }

    /// キー`key`の優先度を`priority`に下げる.
    ///
    /// # Constraints
    ///
    /// - `self.contains(key)`
    /// - `priority <= self.priority(key)`
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    pub fn decrease_key(&mut self, key: usize, priority: f64) {
        debug_assert!(self.contains(key));
        debug_assert!(priority.total_cmp(&self.priority[key]).is_le());
        self.priority[key] = priority;
        if let Some(i) = self.position[key] {
            self.sift_up(i);
        }
    }

    /// 優先度が最小のキーを削除して返す. 空なら`None`を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    pub fn extract_min(&mut self) -> Option<usize> {
        let last = self.heap.len().checked_sub(1)?;
        self.swap(0, last);
        let min = self.heap.pop()?;
        self.position[min] = None;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(min)
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.priority[self.heap[i]]
            .total_cmp(&self.priority[self.heap[j]])
            .is_lt()
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.position[self.heap[i]] = Some(i);
        self.position[self.heap[j]] = Some(j);
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.less(i, parent) {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        loop {
            let left = 2 * i + 1;
            if left >= self.heap.len() {
                break;
            }
            let right = left + 1;
            let child = if right < self.heap.len() && self.less(right, left) {
                right
            } else {
                left
            };
            if !self.less(child, i) {
                break;
            }
            self.swap(i, child);
            i = child;
        }
    }
}

impl IndexedMinPriorityQueue for IndexMinPq {
    fn with_capacity(n: usize) -> Self {
        Self::new(n)
    }

    fn insert(&mut self, key: usize, priority: f64) {
        IndexMinPq::insert(self, key, priority);
    }

    fn decrease_key(&mut self, key: usize, priority: f64) {
        IndexMinPq::decrease_key(self, key, priority);
    }

    fn extract_min(&mut self) -> Option<usize> {
        IndexMinPq::extract_min(self)
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

/// キューからキーを優先度の小さい順に取り出すイテレータ
pub struct IntoKeys(IndexMinPq);
impl Iterator for IntoKeys {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.0.extract_min()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}
impl ExactSizeIterator for IntoKeys {}
impl std::iter::FusedIterator for IntoKeys {}

impl IntoIterator for IndexMinPq {
    type Item = usize;

    type IntoIter = IntoKeys;

    fn into_iter(self) -> IntoKeys {
        IntoKeys(self)
    }
}
