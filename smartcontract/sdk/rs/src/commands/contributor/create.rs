use crate::DoubleZeroClient;
use doublezero_serviceability::{
    instructions::DoubleZeroInstruction,
    pda::{get_contributor_pda, get_globalconfig_pda},
    processors::contributor::create::ContributorCreateArgs,
};
use solana_sdk::{instruction::AccountMeta, pubkey::Pubkey, signature::Signature};

#[derive(Debug, PartialEq, Clone)]
pub struct CreateContributorCommand {
    pub index: u128,
    pub code: String,
    pub ata_owner_pk: Pubkey,
}

impl CreateContributorCommand {
    pub fn execute(&self, client: &dyn DoubleZeroClient) -> eyre::Result<(Signature, Pubkey)> {
        let (globalstate_pubkey, _) = get_globalconfig_pda(&client.get_program_id());
        let (pda_pubkey, bump_seed) = get_contributor_pda(&client.get_program_id(), self.index);

        client
            .execute_transaction(
                DoubleZeroInstruction::CreateContributor(ContributorCreateArgs {
                    index: self.index,
                    bump_seed,
                    code: self.code.clone(),
                    ata_owner_pk: self.ata_owner_pk,
                }),
                vec![
                    AccountMeta::new(pda_pubkey, false),
                    AccountMeta::new(globalstate_pubkey, false),
                ],
            )
            .map(|sig| (sig, pda_pubkey))
    }
}
