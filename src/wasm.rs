use crate::node::NodeId;
use crate::options::{BuildOptions, LinkStrategy};
use crate::tree::KdTree;
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_rayon::init_thread_pool;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn init_threads(n: usize) -> js_sys::Promise {
    init_thread_pool(n)
}

#[wasm_bindgen(typescript_custom_section)]
const TS_LINK_STRATEGY: &'static str = r#"
export type LinkStrategy = "iterative" | "recursive" | "select";
"#;

/// Split a flat coordinate buffer `[x0, y0, ..., x1, y1, ...]` into points of `dimensions` axes.
fn split_flat(coordinates: &[f64], dimensions: usize) -> Result<Vec<Vec<f64>>, String> {
    if dimensions == 0 {
        return Err("dimensions must be at least 1".to_string());
    }
    if coordinates.len() % dimensions != 0 {
        return Err(format!(
            "{} coordinates do not divide into points of {} axes",
            coordinates.len(),
            dimensions
        ));
    }
    Ok(coordinates.chunks_exact(dimensions).map(|c| c.to_vec()).collect())
}

fn parse_strategy(name: &str) -> Result<LinkStrategy, String> {
    match name {
        "iterative" => Ok(LinkStrategy::Iterative),
        "recursive" => Ok(LinkStrategy::Recursive),
        "select" => Ok(LinkStrategy::Select),
        other => Err(format!("unknown link strategy '{}'", other)),
    }
}

/// Balanced k-d tree over `f64` points of a dimension chosen at construction.
///
/// Nodes are addressed by the index of their point in the order points were added.
#[wasm_bindgen(js_name = KdTree)]
pub struct KdTreeWASM {
    inner: KdTree<Vec<f64>>,
    dimensions: usize,
}

#[wasm_bindgen(js_class = KdTree)]
impl KdTreeWASM {
    #[wasm_bindgen(constructor)]
    pub fn new(coordinates: &[f64], dimensions: usize) -> Result<KdTreeWASM, JsValue> {
        let points = split_flat(coordinates, dimensions).map_err(|e| JsValue::from_str(&e))?;
        let inner = KdTree::build(points).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(KdTreeWASM { inner, dimensions })
    }

    pub fn grow(&mut self, coordinates: &[f64]) -> Result<(), JsValue> {
        let points = split_flat(coordinates, self.dimensions).map_err(|e| JsValue::from_str(&e))?;
        self.inner.grow(points).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn rebalance(&mut self) {
        self.inner.rebalance();
    }

    /// Selects the link strategy used by the next grow or rebalance.
    #[wasm_bindgen(js_name = setStrategy)]
    pub fn set_strategy(&mut self, strategy: &str) -> Result<(), JsValue> {
        let strategy = parse_strategy(strategy).map_err(|e| JsValue::from_str(&e))?;
        let options = BuildOptions { strategy, ..*self.inner.options() };
        self.inner.set_options(options);
        Ok(())
    }

    #[wasm_bindgen(getter)]
    pub fn root(&self) -> Option<usize> {
        self.inner.root().map(|n| n.index())
    }

    pub fn left(&self, node: usize) -> Option<usize> {
        self.inner.node(NodeId(node))?.left().map(|n| n.index())
    }

    pub fn right(&self, node: usize) -> Option<usize> {
        self.inner.node(NodeId(node))?.right().map(|n| n.index())
    }

    pub fn coordinates(&self, node: usize) -> Vec<f64> {
        self.inner.node(NodeId(node)).map(|n| n.data().clone()).unwrap_or_default()
    }

    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.inner.len()
    }

    #[wasm_bindgen(getter)]
    pub fn depth(&self) -> usize {
        self.inner.depth()
    }

    #[wasm_bindgen(getter)]
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_flat() {
        let points = split_flat(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3).unwrap();
        assert_eq!(points, vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert!(split_flat(&[], 2).unwrap().is_empty());
        assert!(split_flat(&[1.0, 2.0, 3.0], 2).is_err());
        assert!(split_flat(&[1.0], 0).is_err());
    }

    #[test]
    fn test_parse_strategy() {
        assert_eq!(parse_strategy("select"), Ok(LinkStrategy::Select));
        assert_eq!(parse_strategy("recursive"), Ok(LinkStrategy::Recursive));
        assert!(parse_strategy("bogus").is_err());
    }

    #[test]
    fn test_wrapper_walk() {
        let tree = KdTreeWASM::new(&[1.0, 1.0, 2.0, 2.0, 3.0, 3.0], 2).unwrap();
        assert_eq!(tree.length(), 3);
        assert_eq!(tree.dimensions(), 2);
        let root = tree.root().unwrap();
        assert_eq!(tree.coordinates(root), vec![2.0, 2.0]);
        assert_eq!(tree.left(root).map(|n| tree.coordinates(n)), Some(vec![1.0, 1.0]));
        assert_eq!(tree.right(root).map(|n| tree.coordinates(n)), Some(vec![3.0, 3.0]));
        assert!(tree.coordinates(42).is_empty());
    }
}
