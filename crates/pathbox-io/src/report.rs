//! Output of all-pairs results.
use pathbox_graph::{DistanceMatrix, NegativeCycleDetected};
use std::fmt;
use std::io::{self, Write};

/// Receiver of the outcome of an all-pairs shortest path computation.
pub trait Report<W> {
    /// Error raised while reporting.
    type Error;

    /// Called with the distance matrix of a successful run.
    fn distances(&mut self, matrix: &DistanceMatrix<W>) -> Result<(), Self::Error>;

    /// Called when the graph contains a negative cycle.
    fn negative_cycle(&mut self, err: &NegativeCycleDetected) -> Result<(), Self::Error>;
}

/// Forwards the outcome of a run to the matching [`Report`] method.
pub fn report<W, R: Report<W>>(
    result: &Result<DistanceMatrix<W>, NegativeCycleDetected>,
    out: &mut R,
) -> Result<(), R::Error> {
    match result {
        Ok(matrix) => out.distances(matrix),
        Err(err) => out.negative_cycle(err),
    }
}

/// Plain text report.
///
/// Writes one line per node, holding its tab-separated distances to every node in label order,
/// with `inf` for unreachable nodes. A negative cycle is reported on a single line.
#[derive(Debug)]
pub struct TextReport<Wr> {
    writer: Wr,
}

impl<Wr: Write> TextReport<Wr> {
    /// Create a report writing into `writer`.
    pub fn new(writer: Wr) -> Self {
        Self { writer }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> Wr {
        self.writer
    }
}

impl<W: Copy + fmt::Display, Wr: Write> Report<W> for TextReport<Wr> {
    type Error = io::Error;

    fn distances(&mut self, matrix: &DistanceMatrix<W>) -> io::Result<()> {
        let nodes = matrix.nodes();
        for (_, row) in matrix.rows() {
            for (i, to) in nodes.iter().enumerate() {
                if i > 0 {
                    self.writer.write_all(b"\t")?;
                }
                write!(self.writer, "{}", row[to.index()])?;
            }
            writeln!(self.writer)?;
        }
        self.writer.flush()
    }

    fn negative_cycle(&mut self, err: &NegativeCycleDetected) -> io::Result<()> {
        writeln!(self.writer, "negative cycle detected: node {} can still be improved", err.node)?;
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathbox_graph::{Digraph, JohnsonConfig, NodeId};

    fn render<W: Copy + fmt::Display>(
        result: &Result<DistanceMatrix<W>, NegativeCycleDetected>,
    ) -> String {
        let mut out = TextReport::new(Vec::new());
        report(result, &mut out).unwrap();
        String::from_utf8(out.into_inner()).unwrap()
    }

    #[test]
    fn test_distances() {
        let graph = Digraph::from_edges(3, [(1, 2, 1), (2, 3, 2), (1, 3, 5)]).unwrap();
        insta::assert_snapshot!(render(&graph.all_pairs(&JohnsonConfig::new())), @r"
        0	1	3
        inf	0	2
        inf	inf	0
        ");
    }

    #[test]
    fn test_float_distances() {
        let graph = Digraph::from_edges(2, [(1, 2, -1.5)]).unwrap();
        insta::assert_snapshot!(render(&graph.all_pairs(&JohnsonConfig::new())), @r"
        0	-1.5
        inf	0
        ");
    }

    #[test]
    fn test_negative_cycle() {
        let result: Result<DistanceMatrix<i32>, _> = Err(NegativeCycleDetected { node: NodeId::new(2) });
        insta::assert_snapshot!(
            render(&result),
            @"negative cycle detected: node 2 can still be improved"
        );
    }

    struct Counter {
        distances: usize,
        cycles: usize,
    }

    impl Report<i64> for Counter {
        type Error = ();

        fn distances(&mut self, _: &DistanceMatrix<i64>) -> Result<(), ()> {
            self.distances += 1;
            Ok(())
        }

        fn negative_cycle(&mut self, _: &NegativeCycleDetected) -> Result<(), ()> {
            self.cycles += 1;
            Ok(())
        }
    }

    #[test]
    fn test_report_dispatch() {
        let mut counter = Counter { distances: 0, cycles: 0 };
        let graph = Digraph::<i64>::from_edges(2, [(1, 2, 3), (2, 1, -4)]).unwrap();
        report(&graph.all_pairs(&JohnsonConfig::new()), &mut counter).unwrap();
        report(&Digraph::<i64>::new(2).all_pairs(&JohnsonConfig::new()), &mut counter).unwrap();

        assert_eq!(1, counter.distances);
        assert_eq!(1, counter.cycles);
    }
}
