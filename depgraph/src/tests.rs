use lazy_static::lazy_static;

use crate::graph::{DepTriple, Sentence};
use crate::token::TokenBuilder;

lazy_static! {
    pub static ref TEST_SENTENCES: Vec<Sentence> = {
        let mut sentences = Vec::new();

        let mut s1 = Sentence::new();
        s1.push(TokenBuilder::new("Jan").lemma("Jan").pos("name").into());
        s1.push(TokenBuilder::new("loopt").lemma("loop").pos("verb").into());
        s1.dep_graph_mut()
            .add_deprel(DepTriple::new(2, Some("su"), 1))
            .unwrap();
        s1.dep_graph_mut()
            .add_deprel(DepTriple::new(0, Some("ROOT"), 2))
            .unwrap();
        sentences.push(s1);

        let mut s2 = Sentence::new();
        s2.push(TokenBuilder::new("New_York").lemma("New_York").pos("mwu").into());
        s2.push(TokenBuilder::new("is").lemma("ben").pos("verb").into());
        s2.push(TokenBuilder::new("groot").lemma("groot").pos("adj").into());
        s2.dep_graph_mut()
            .add_deprel(DepTriple::new(2, Some("su"), 1))
            .unwrap();
        s2.dep_graph_mut()
            .add_deprel(DepTriple::new(0, Some("ROOT"), 2))
            .unwrap();
        s2.dep_graph_mut()
            .add_deprel(DepTriple::new(2, Some("predc"), 3))
            .unwrap();
        sentences.push(s2);

        sentences
    };
}
