use crate::domain::graph::{Graph, SccResult};
use crate::domain::traits::SccDetector;

pub struct KosarajuSccDetector;

impl SccDetector for KosarajuSccDetector {
    fn compute_scc(&self, graph: &Graph) -> SccResult {
        kosaraju_scc(graph)
    }
}

fn kosaraju_scc(graph: &Graph) -> SccResult {
    let n = graph.node_count();
    let transposed = transpose(graph);

    let mut order: Vec<usize> = Vec::with_capacity(n);
    let mut seen = vec![false; n];
    for start in 0..n {
        if !seen[start] {
            finish_order(start, &graph.edges, &mut seen, &mut order);
        }
    }

    // Label components on the transposed graph, in decreasing finish time.
    let mut component_of = vec![usize::MAX; n];
    let mut count = 0;
    for &root in order.iter().rev() {
        if component_of[root] == usize::MAX {
            label_component(root, count, &transposed, &mut component_of);
            count += 1;
        }
    }

    // Bucketing by ascending node index keeps every member list sorted.
    let mut components: Vec<Vec<usize>> = vec![Vec::new(); count];
    for (v, &cid) in component_of.iter().enumerate() {
        components[cid].push(v);
    }

    let mut cyclic_component = vec![false; count];
    for (v, outs) in graph.edges.iter().enumerate() {
        let cid = component_of[v];
        if outs.iter().any(|&to| component_of[to] == cid) {
            cyclic_component[cid] = true;
        }
    }

    SccResult {
        component_of,
        components,
        cyclic_component,
    }
}

fn transpose(graph: &Graph) -> Vec<Vec<usize>> {
    let mut rev: Vec<Vec<usize>> = vec![Vec::new(); graph.node_count()];
    for (u, outs) in graph.edges.iter().enumerate() {
        for &v in outs {
            rev[v].push(u);
        }
    }
    rev
}

fn label_component(root: usize, cid: usize, rev: &[Vec<usize>], component_of: &mut [usize]) {
    component_of[root] = cid;
    let mut stack = vec![root];
    while let Some(x) = stack.pop() {
        for &p in rev[x].iter() {
            if component_of[p] == usize::MAX {
                component_of[p] = cid;
                stack.push(p);
            }
        }
    }
}

/// Iterative DFS appending nodes in post-order; deep graphs must not blow the stack.
fn finish_order(start: usize, edges: &[Vec<usize>], seen: &mut [bool], order: &mut Vec<usize>) {
    let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
    seen[start] = true;

    while let Some((v, next_i)) = stack.pop() {
        if let Some(&to) = edges[v].get(next_i) {
            stack.push((v, next_i + 1));
            if !seen[to] {
                seen[to] = true;
                stack.push((to, 0));
            }
            continue;
        }

        order.push(v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_graph_has_no_components() {
        let scc = KosarajuSccDetector.compute_scc(&Graph::new(0));
        assert!(scc.components.is_empty());
        assert!(scc.component_of.is_empty());
    }

    #[test]
    fn long_chain_does_not_recurse() {
        let n = 200_000;
        let mut g = Graph::new(n);
        for i in 0..n - 1 {
            g.edges[i].push(i + 1);
        }
        g.edges[n - 1].push(0);

        let scc = KosarajuSccDetector.compute_scc(&g);
        assert_eq!(scc.components.len(), 1);
        assert_eq!(scc.components[0].len(), n);
        assert_eq!(scc.cyclic_component, vec![true]);
    }

    #[test]
    fn component_of_agrees_with_components() {
        // 0 <-> 1 -> 2 <-> 3, 4 isolated
        let mut g = Graph::new(5);
        g.edges[0].push(1);
        g.edges[1].push(0);
        g.edges[1].push(2);
        g.edges[2].push(3);
        g.edges[3].push(2);

        let scc = KosarajuSccDetector.compute_scc(&g);
        assert_eq!(scc.components.len(), 3);
        for (cid, comp) in scc.components.iter().enumerate() {
            for &v in comp {
                assert_eq!(scc.component_of[v], cid);
            }
        }
        assert_eq!(scc.component_of[0], scc.component_of[1]);
        assert_eq!(scc.component_of[2], scc.component_of[3]);
        assert_ne!(scc.component_of[1], scc.component_of[2]);
    }
}
