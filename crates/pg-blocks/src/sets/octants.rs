//! Jeu BLOCKS_2X4 : octants Unicode 16.0 (Symbols for Legacy Computing
//! Supplement).
//!
//! Rangs (row-major) :
//! +---+---+
//! | 0 | 1 |
//! +---+---+
//! | 2 | 3 |
//! +---+---+
//! | 4 | 5 |
//! +---+---+
//! | 6 | 7 |
//! +---+---+

use pg_core::error::CoreError;

use crate::encoder::ChunkEncoder;

/// Les 256 combinaisons, indexées par la valeur packée du chunk.
/// La plage U+1CD00..U+1CDE5 ne couvre pas tout : les motifs déjà encodés
/// ailleurs (quadrants, demi-blocs, huitièmes 🮂 ▂ 🮅 ▆, coins 𜺨 𜺫 𜺣 𜺠,
/// 🯦 🯧) gardent leur point de code historique.
const GLYPHS: &str = concat!(
    " 𜺨𜺫🮂𜴀▘𜴁𜴂𜴃𜴄▝𜴅𜴆𜴇𜴈▀𜴉𜴊𜴋𜴌🯦𜴍𜴎𜴏𜴐𜴑𜴒𜴓𜴔𜴕𜴖𜴗𜴘𜴙𜴚𜴛𜴜𜴝𜴞𜴟🯧𜴠𜴡𜴢𜴣𜴤𜴥𜴦𜴧𜴨𜴩𜴪𜴫𜴬𜴭𜴮𜴯𜴰𜴱𜴲𜴳𜴴𜴵🮅",
    "𜺣𜴶𜴷𜴸𜴹𜴺𜴻𜴼𜴽𜴾𜴿𜵀𜵁𜵂𜵃𜵄▖𜵅𜵆𜵇𜵈▌𜵉𜵊𜵋𜵌▞𜵍𜵎𜵏𜵐▛𜵑𜵒𜵓𜵔𜵕𜵖𜵗𜵘𜵙𜵚𜵛𜵜𜵝𜵞𜵟𜵠𜵡𜵢𜵣𜵤𜵥𜵦𜵧𜵨𜵩𜵪𜵫𜵬𜵭𜵮𜵯𜵰",
    "𜺠𜵱𜵲𜵳𜵴𜵵𜵶𜵷𜵸𜵹𜵺𜵻𜵼𜵽𜵾𜵿𜶀𜶁𜶂𜶃𜶄𜶅𜶆𜶇𜶈𜶉𜶊𜶋𜶌𜶍𜶎𜶏▗𜶐𜶑𜶒𜶓▚𜶔𜶕𜶖𜶗▐𜶘𜶙𜶚𜶛▜𜶜𜶝𜶞𜶟𜶠𜶡𜶢𜶣𜶤𜶥𜶦𜶧𜶨𜶩𜶪𜶫",
    "▂𜶬𜶭𜶮𜶯𜶰𜶱𜶲𜶳𜶴𜶵𜶶𜶷𜶸𜶹𜶺𜶻𜶼𜶽𜶾𜶿𜷀𜷁𜷂𜷃𜷄𜷅𜷆𜷇𜷈𜷉𜷊𜷋𜷌𜷍𜷎𜷏𜷐𜷑𜷒𜷓𜷔𜷕𜷖𜷗𜷘𜷙𜷚▄𜷛𜷜𜷝𜷞▙𜷟𜷠𜷡𜷢▟𜷣▆𜷤𜷥█",
);

const ORDER: &[&[u8]] = &[&[0, 1], &[2, 3], &[4, 5], &[6, 7]];

/// BLOCKS_2X4 : chunks de 4 lignes × 2 colonnes.
///
/// # Errors
/// Voir [`ChunkEncoder::new`].
pub fn blocks_2x4() -> Result<ChunkEncoder, CoreError> {
    ChunkEncoder::from_chars(GLYPHS, ORDER)
}
