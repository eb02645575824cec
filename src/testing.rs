/// Every graph should implement `GraphNodeOrder` and `GraphEdgeOrder`
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, $undirected:literal, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{edge::*, node::*, ops::*, repr::*, testing::test_graph_ops};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            /// Creates a list of at most `m_ub` random edges for nodes `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
                let mut edges: Vec<Edge> = (0..m_ub).map(|_| {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);

                    if $undirected {
                        Edge(u, v).normalized()
                    } else {
                        Edge(u, v)
                    }
                }).collect_vec();
                edges.sort_unstable();
                edges.dedup();

                edges
            }

            /// Sorted neighbor lists of all nodes as implied by `edges`
            fn reference_neighbors(n: NumNodes, edges: &[Edge], reverse: bool) -> Vec<Vec<Node>> {
                let mut nbs = vec![Vec::new(); n as usize];
                for &Edge(u, v) in edges {
                    let (u, v) = if reverse { (v, u) } else { (u, v) };
                    nbs[u as usize].push(v);
                    if $undirected && u != v {
                        nbs[v as usize].push(u);
                    }
                }
                nbs.iter_mut().for_each(|x| x.sort_unstable());
                nbs
            }

            $(
                test_graph_ops!($graph<$undirected>: $trait);
            )*
        }
    };
    ($graph:ident<$undirected:literal>: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 0..50 {
                let graph = <$graph>::new(n);

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);
                assert_eq!(graph.is_empty(), n == 0);

                assert_eq!(graph.vertices_range().len(), n as usize);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
            }
        }
    };
    ($graph:ident<$undirected:literal>: AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);
                        let graph = <$graph>::from_edges(n, edges.iter());
                        let reference = reference_neighbors(n, &edges, false);

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);
                        assert_eq!(edges, graph.ordered_edges($undirected).collect_vec());

                        for u in 0..n {
                            assert_eq!(graph.neighbors_of(u).sorted().collect_vec(), reference[u as usize]);
                            assert_eq!(graph.degree_of(u) as usize, reference[u as usize].len());
                        }
                    }
                }
            }
        }
    };
    ($graph:ident<$undirected:literal>: DirectedAdjacencyList) => {
        #[test]
        fn test_directed_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);
                        let graph = <$graph>::from_edges(n, edges.iter());
                        let reference_in = reference_neighbors(n, &edges, true);

                        for u in 0..n {
                            assert_eq!(graph.in_neighbors_of(u).sorted().collect_vec(), reference_in[u as usize]);
                            assert_eq!(graph.in_degree_of(u) as usize, reference_in[u as usize].len());
                            assert!(graph.in_edges_of(u).all(|Edge(v, w)| w == u && graph.has_edge(v, u)));
                        }
                    }
                }
            }
        }
    };
    ($graph:ident<$undirected:literal>: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);
                        let mut graph = <$graph>::new(n);

                        for &Edge(u, v) in &edges {
                            assert!(!graph.try_add_edge(u, v));
                            assert!(graph.try_add_edge(u, v));
                            assert!(graph.has_edge(u, v));
                            if $undirected {
                                assert!(graph.has_edge(v, u));
                            }
                        }

                        let mut m = graph.number_of_edges();
                        assert_eq!(m as usize, edges.len());

                        for &Edge(u, v) in edges.iter().step_by(2) {
                            graph.remove_edge(u, v);
                            assert!(!graph.try_remove_edge(u, v));
                            m -= 1;
                            assert_eq!(m, graph.number_of_edges());
                        }

                        for &Edge(u, v) in edges.iter().skip(1).step_by(2) {
                            assert!(graph.try_remove_edge(u, v));
                        }

                        assert!(graph.is_singleton_graph());
                    }
                }
            }
        }
    };
    ($graph:ident<$undirected:literal>: GraphMultiEdgeEditing) => {
        #[test]
        fn test_graph_multi_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(5);

            for n in [5 as NumNodes, 10, 20] {
                for _ in 0..10 {
                    let edges = random_edges(rng, n, 3 * n);
                    let mut graph = <$graph>::new(n);

                    graph.add_multi_edges(edges.iter());
                    graph.add_multi_edges(edges.iter());

                    assert_eq!(graph.number_of_edges() as usize, 2 * edges.len());
                    for &Edge(u, v) in &edges {
                        assert_eq!(graph.edge_multiplicity(u, v), 2);
                        if $undirected {
                            assert_eq!(graph.edge_multiplicity(v, u), 2);
                        }
                    }

                    for &Edge(u, v) in &edges {
                        graph.remove_edge(u, v);
                        assert_eq!(graph.edge_multiplicity(u, v), 1);
                    }

                    assert_eq!(graph.number_of_edges() as usize, edges.len());
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
