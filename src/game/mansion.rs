//! The classic mansion scenario

use crate::data::{Mansion, RoomId};
use crate::QuestError;

/// Build the seven-room mansion of the classic case and return it with the
/// entry hall.
///
/// Layout, with clues in parentheses:
///
/// ```text
///                Hall de Entrada
///               /               \
///       Biblioteca               Cozinha
///       (Livro rasgado           (Faca desaparecida)
///        com sangue)
///       /          \            /          \
///   Estúdio       Jardim    Depósito    Sala de Jantar
///   (Carta                  (Pegadas
///    suspeita)               estranhas)
/// ```
pub fn classic_mansion() -> Result<(Mansion, RoomId), QuestError> {
    let mut mansion = Mansion::new();

    let hall = mansion.add_room("Hall de Entrada")?;
    let library = mansion.add_room_with_clue("Biblioteca", "Livro rasgado com sangue")?;
    let kitchen = mansion.add_room_with_clue("Cozinha", "Faca desaparecida")?;
    let study = mansion.add_room_with_clue("Estúdio", "Carta suspeita")?;
    let garden = mansion.add_room("Jardim")?;
    let storage = mansion.add_room_with_clue("Depósito", "Pegadas estranhas")?;
    let dining = mansion.add_room("Sala de Jantar")?;

    mansion.connect(hall, Some(library), Some(kitchen));
    mansion.connect(library, Some(study), Some(garden));
    mansion.connect(kitchen, Some(storage), Some(dining));

    Ok((mansion, hall))
}
