// file: `src/gcmc/moves.rs`
use super::{Gcmc, MoveType, PendingMove};
use nalgebra::Vector3;
use rand::Rng;

impl Gcmc {
    /// Pick a move type and apply it tentatively.
    ///
    /// An empty box always receives a creation. Otherwise a particle index and
    /// a uniform `choice` are drawn, in that order: the lower third translates,
    /// the upper third creates and the middle third destroys.
    pub fn propose_move(&mut self) -> MoveType {
        debug_assert!(
            self.pending.is_none(),
            "a trial move is still pending: {:?}",
            self.pending
        );

        let pool = self.positions.len();
        if pool == 0 {
            self.create_particle();
            return MoveType::Create;
        }

        let pick = self.rng.gen_range(0..pool);
        let choice = self.rng.gen::<f64>();
        if choice < 1.0 / 3.0 {
            self.translate_particle(pick);
            MoveType::Translate
        } else if choice >= 2.0 / 3.0 {
            self.create_particle();
            MoveType::Create
        } else {
            self.destroy_particle(pick);
            MoveType::Destroy
        }
    }

    /// Insert a particle at a uniformly random position
    fn create_particle(&mut self) {
        let l = self.lj.sim_box.length;
        let pos = Vector3::new(
            self.rng.gen::<f64>() * l,
            self.rng.gen::<f64>() * l,
            self.rng.gen::<f64>() * l,
        );
        self.positions.push(self.lj.sim_box.wrap(pos));
        self.pending = Some(PendingMove::Create {
            index: self.positions.len() - 1,
        });
    }

    /// Displace a particle by up to half a box length along each axis
    fn translate_particle(&mut self, index: usize) {
        let l = self.lj.sim_box.length;
        let displacement = Vector3::new(
            (self.rng.gen::<f64>() - 0.5) * l,
            (self.rng.gen::<f64>() - 0.5) * l,
            (self.rng.gen::<f64>() - 0.5) * l,
        );
        self.positions[index] = self.lj.sim_box.wrap(self.positions[index] + displacement);
        self.pending = Some(PendingMove::Translate {
            index,
            displacement,
        });
    }

    fn destroy_particle(&mut self, index: usize) {
        let position = self.positions.remove(index);
        self.pending = Some(PendingMove::Destroy { index, position });
    }

    /// Keep the pending move and adopt its energy
    pub fn commit(&mut self, new_energy: f64) {
        debug_assert!(
            self.positions.iter().all(|p| self.lj.sim_box.contains(p)),
            "a committed position left the box"
        );
        self.pending = None;
        self.energy = new_energy;
    }

    /// Undo the pending move.
    ///
    /// A destroyed particle comes back at the end of the pool rather than at
    /// its old index.
    pub fn revert(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };

        match pending {
            PendingMove::Translate {
                index,
                displacement,
            } => {
                self.positions[index] = self.lj.sim_box.wrap(self.positions[index] - displacement);
            }
            PendingMove::Create { index } => {
                self.positions.remove(index);
            }
            PendingMove::Destroy { position, .. } => {
                self.positions.push(position);
            }
        }
    }
}
