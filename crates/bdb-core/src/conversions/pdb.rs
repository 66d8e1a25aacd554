use crate::atoms::{AtomRecord, BFactorSeries};
use pdbtbx::PDB;

impl From<&PDB> for BFactorSeries {
    // the PDB API requires us to iterate:
    // Model --> Chain --> Residue --> Conformer --> Atom.
    // Only the first model is used; alternate conformers each contribute their atoms.
    fn from(pdb_data: &PDB) -> Self {
        let Some(model) = pdb_data.model(0) else {
            return BFactorSeries::default();
        };

        model
            .chains()
            .flat_map(|chain| {
                let chain_id = chain.id().to_string();
                chain.residues().flat_map(move |residue| {
                    let res_seq = residue.serial_number();
                    let insertion_code = residue.insertion_code().map(str::to_string);
                    let chain_id = chain_id.clone();
                    residue.conformers().flat_map(move |conformer| {
                        let alt_loc = conformer.alternative_location().map(str::to_string);
                        let chain_id = chain_id.clone();
                        let insertion_code = insertion_code.clone();
                        conformer.atoms().map(move |atom| {
                            let record = AtomRecord {
                                chain_id: chain_id.clone(),
                                res_seq,
                                insertion_code: insertion_code.clone(),
                                atom_name: atom.name().to_string(),
                                alt_loc: alt_loc.clone(),
                            };
                            (record, atom.b_factor())
                        })
                    })
                })
            })
            .collect()
    }
}
