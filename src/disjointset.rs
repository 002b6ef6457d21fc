/// 素集合データ構造の操作
///
/// Kruskal法はこのトレイトだけを通して素集合を扱うので, 実装を差し替えられる.
pub trait DisjointSet {
    /// `n`個の要素がそれぞれ別のグループに属している状態を作る.
    #[must_use]
    fn with_len(n: usize) -> Self
    where
        Self: Sized;

    /// 要素`a`が属するグループの代表を返す.
    fn find(&mut self, a: usize) -> usize;

    /// 要素`a`と要素`b`のグループをマージし, 新しいグループの代表を返す.
    fn union(&mut self, a: usize, b: usize) -> usize;

    /// グループの総数を返す.
    #[must_use]
    fn count(&self) -> usize;
}

/// 素集合データ構造
///
/// 幾つかのグループのマージとグループの所属判定を高速に行える.
/// 根は`-(グループの要素数)`を, それ以外は親の番号を持つ.
#[derive(Clone, Default)]
pub struct UnionFind {
    parent: Box<[isize]>,
    count: usize,
}

impl UnionFind {
    /// `n`個の要素があり, それぞれ別のグループに属しているUnionFindを作る.
    ///
    /// # Time complexity
    ///
    /// - *O*(*n*)
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: vec![-1; n].into_boxed_slice(),
            count: n,
        }
    }

    /// 要素の総数を返す.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// 要素`a`が属するグループの代表を返す. 辿った要素は全て代表に直接繋ぎ直す.
    ///
    /// # Time complexity
    ///
    /// - *O*(α(*n*))
    pub fn find(&mut self, mut a: usize) -> usize {
        debug_assert!(a < self.len());
        let mut root = a;
        while self.parent[root] >= 0 {
            root = self.parent[root] as usize;
        }
        while a != root {
            let next = self.parent[a] as usize;
            self.parent[a] = root as isize;
            a = next;
        }
        root
    }

    /// 要素`a`が属するグループと要素`b`が属するグループを1つのグループにマージし, 新しいグループの代表を返す.
    /// 要素数の少ない方を多い方の下に繋ぐ.
    /// 最初から同じグループに属していた場合は, 何もせずにそのグループの代表を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(α(*n*))
    pub fn union(&mut self, a: usize, b: usize) -> usize {
        debug_assert!(a < self.len());
        debug_assert!(b < self.len());
        let (mut a, mut b) = (self.find(a), self.find(b));
        if a == b {
            return a;
        }
        // 根の値は要素数の符号反転なので, 値が大きい方が小さいグループ
        if self.parent[a] > self.parent[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[a] += self.parent[b];
        self.parent[b] = a as isize;
        self.count -= 1;
        a
    }

    /// 要素`a`, `b`が同じグループに属するか判定する.
    ///
    /// # Time complexity
    ///
    /// - *O*(α(*n*))
    pub fn same(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// 要素`a`が属するグループの要素数を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(α(*n*))
    pub fn size(&mut self, a: usize) -> usize {
        let root = self.find(a);
        -self.parent[root] as usize
    }

    /// グループの総数を返す.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    // 経路圧縮をしないfind. Debug出力用
    fn root(&self, mut a: usize) -> usize {
        while self.parent[a] >= 0 {
            a = self.parent[a] as usize;
        }
        a
    }
}

impl DisjointSet for UnionFind {
    fn with_len(n: usize) -> Self {
        Self::new(n)
    }

    fn find(&mut self, a: usize) -> usize {
        UnionFind::find(self, a)
    }

    fn union(&mut self, a: usize, b: usize) -> usize {
        UnionFind::union(self, a, b)
    }

    fn count(&self) -> usize {
        self.count
    }
}

impl std::fmt::Debug for UnionFind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        struct Group(Vec<usize>);
        impl std::fmt::Debug for Group {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_set().entries(&self.0).finish()
            }
        }

        let mut groups = vec![Vec::new(); self.len()];
        for a in 0..self.len() {
            groups[self.root(a)].push(a);
        }
        f.debug_set()
            .entries(groups.into_iter().filter(|g| !g.is_empty()).map(Group))
            .finish()
    }
}
