use lazy_static::lazy_static;

use depgraph::graph::{DepTriple, Sentence};
use depgraph::token::TokenBuilder;

lazy_static! {
    pub static ref TEST_SENTENCES: Vec<Sentence> = {
        let mut sentences = Vec::new();

        let mut s1 = Sentence::new();
        s1.push(TokenBuilder::new("Jan").lemma("Jan").pos("name").into());
        s1.push(TokenBuilder::new("loopt").lemma("loop").pos("verb").into());
        s1.push(TokenBuilder::new("naar").lemma("naar").pos("prep").into());
        s1.push(TokenBuilder::new("huis").lemma("huis").pos("noun").into());
        s1.push(TokenBuilder::new(".").lemma(".").pos("punct").into());
        for &(head, relation, dependent) in &[
            (2, "su", 1),
            (0, "ROOT", 2),
            (2, "mod", 3),
            (3, "obj1", 4),
            (4, "punct", 5),
        ] {
            s1.dep_graph_mut()
                .add_deprel(DepTriple::new(head, Some(relation), dependent))
                .unwrap();
        }
        sentences.push(s1);

        let mut s2 = Sentence::new();
        s2.push(TokenBuilder::new("Hij").lemma("hij").pos("pron").into());
        s2.push(TokenBuilder::new("woont").lemma("woon").pos("verb").into());
        s2.push(TokenBuilder::new("in").lemma("in").pos("prep").into());
        s2.push(TokenBuilder::new("DenHaag").lemma("Den  Haag").pos("name").into());
        s2.push(TokenBuilder::new("São").into());
        for &(head, relation, dependent) in &[
            (2, "su", 1),
            (0, "ROOT", 2),
            (2, "mod", 3),
            (3, "obj1", 4),
            (4, "app", 5),
        ] {
            s2.dep_graph_mut()
                .add_deprel(DepTriple::new(head, Some(relation), dependent))
                .unwrap();
        }
        sentences.push(s2);

        sentences
    };
}
